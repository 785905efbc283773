//! 数据模型定义
//!
//! 按领域划分的业务模型（entities / requests / responses），
//! 以及通用的响应封装、分页结构和错误码。

pub mod common;

pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod divisions;
pub mod performance;
pub mod tests;
pub mod users;

pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 业务错误码，HTTP 状态码 x 100 + 序号
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 40000,
    MissingParameter = 40001,

    Unauthorized = 40100,
    AuthFailed = 40101,

    Forbidden = 40300,

    NotFound = 40400,
    UserNotFound = 40401,
    StudentNotFound = 40402,
    TeacherNotFound = 40403,
    DivisionNotFound = 40404,
    AssignmentNotFound = 40405,
    AttendanceNotFound = 40406,
    TestNotFound = 40407,

    UserAlreadyExists = 40901,
    PrnAlreadyExists = 40902,
    DivisionAlreadyExists = 40903,
    AssignmentAlreadyExists = 40904,

    UserNameInvalid = 42201,
    UserEmailInvalid = 42202,
    UserPasswordInvalid = 42203,
    MarksValidationFailed = 42204,
    DateInvalid = 42205,

    RateLimitExceeded = 42900,

    InternalServerError = 50000,
    RegisterFailed = 50001,
    UserCreationFailed = 50002,
    UserDeleteFailed = 50003,
    AttendanceSaveFailed = 50004,
    TestCreationFailed = 50005,
    MarksSaveFailed = 50006,
}

/// 程序启动时间，用于运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
