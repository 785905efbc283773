pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod divisions;
pub mod performance;
pub mod reports;
pub mod tests;
pub mod users;

pub use assignments::AssignmentService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use divisions::DivisionService;
pub use performance::PerformanceService;
pub use reports::ReportService;
pub use tests::TestService;
pub use users::UserService;
