use crate::models::divisions::entities::Division;
use crate::models::users::entities::User;
use serde::Serialize;
use ts_rs::TS;

// 指派详情（带教师与分组信息）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentView {
    pub id: i64,
    pub teacher: User,
    pub division: Division,
    pub assigned_at: chrono::DateTime<chrono::Utc>,
}

// 指派列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListResponse {
    pub assignments: Vec<AssignmentView>,
}
