use serde::Deserialize;
use ts_rs::TS;

// 指派教师请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignTeacherRequest {
    pub teacher_id: i64,
    pub division_id: i64,
}
