pub mod assignments;

pub mod auth;

pub mod classes;

pub mod reports;

pub mod submissions;

pub mod system;

pub mod tests;

pub use assignments::configure_assignment_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use reports::configure_report_routes;
pub use submissions::configure_submission_routes;
pub use system::configure_system_routes;
pub use tests::configure_test_routes;
