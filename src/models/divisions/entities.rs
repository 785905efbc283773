use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级分组实体
// (name, year, branch) 唯一，创建后不再修改
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/division.ts")]
pub struct Division {
    pub id: i64,
    pub name: String,
    pub year: String,
    pub branch: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
