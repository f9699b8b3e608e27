pub mod pure;
pub mod types;

pub use pure::Session;
pub use types::{Action, Dashboard, DashboardContent, EnrollmentField, NavTab, Screen};
