use super::entities::Division;
use crate::models::users::entities::User;
use serde::Serialize;
use ts_rs::TS;

// 分组响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/division.ts")]
pub struct DivisionResponse {
    pub division: Division,
}

// 分组列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/division.ts")]
pub struct DivisionListResponse {
    pub divisions: Vec<Division>,
}

// 分组学生列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/division.ts")]
pub struct DivisionStudentsResponse {
    pub students: Vec<User>,
}
