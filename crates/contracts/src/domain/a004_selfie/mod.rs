pub mod aggregate;
pub mod sample;

pub use aggregate::{Selfie, SelfieQuality, SelfieStatus};
pub use sample::SELFIES;
