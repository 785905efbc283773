pub mod requests;
pub mod responses;

pub use requests::{LoginRequest, RegisterStudentRequest, RegisterTeacherRequest};
pub use responses::LoginResponse;
