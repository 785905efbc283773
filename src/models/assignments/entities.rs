use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教师-分组指派
// (teacher_id, division_id) 唯一，指派后教师获得该分组学生的可见性
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct TeacherAssignment {
    pub id: i64,
    pub teacher_id: i64,
    pub division_id: i64,
    pub assigned_at: chrono::DateTime<chrono::Utc>,
}
