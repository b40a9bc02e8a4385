pub mod aggregate;
pub mod sample;

pub use aggregate::{Employee, EmployeeDraft, EmployeeStatus};
pub use sample::EMPLOYEES;
