pub mod assignments;

pub mod attendance;

pub mod auth;

pub mod divisions;

pub mod performance;

pub mod reports;

pub mod tests;

pub mod users;

pub use assignments::configure_assignment_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use divisions::configure_division_routes;
pub use performance::configure_performance_routes;
pub use reports::configure_report_routes;
pub use tests::configure_test_routes;
pub use users::configure_user_routes;
