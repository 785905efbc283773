use super::entities::Subject;
use serde::Deserialize;
use ts_rs::TS;

// 创建测验请求，date 形如 "YYYY-MM-DD"
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct CreateTestRequest {
    pub name: String,
    pub year: String,
    pub date: String,
    pub total_marks: f64,
}

// 单条成绩提交项
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct MarkEntry {
    pub student_id: i64,
    pub test_id: i64,
    pub subject: Subject,
    pub marks_obtained: f64,
}

// 批量成绩提交请求，所有条目须属于同一场测验
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct SaveMarksRequest {
    pub marks: Vec<MarkEntry>,
}

// 分组查询参数（进步名单 / 图表）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct ImprovementParams {
    pub division_id: Option<i64>,
}

// 测验创建载荷（用于存储层，date 已解析）
#[derive(Debug, Clone)]
pub struct NewTest {
    pub name: String,
    pub year: String,
    pub date: chrono::DateTime<chrono::Utc>,
    pub total_marks: f64,
}
