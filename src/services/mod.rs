pub mod assignments;
pub mod auth;
pub mod classes;
pub mod reports;
pub mod submissions;
pub mod system;
pub mod tests;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use reports::ReportService;
pub use submissions::SubmissionService;
pub use tests::TestService;
