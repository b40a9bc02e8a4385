//! Employee add/edit form
//!
//! - view_model.rs: draft state and the stage command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::EmployeeDetails;
pub use view_model::EmployeeDetailsViewModel;
