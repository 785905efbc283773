use super::entities::{Test, TestMark};
use serde::Serialize;
use ts_rs::TS;

// 测验响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestResponse {
    pub test: Test,
}

// 测验列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestListResponse {
    pub tests: Vec<Test>,
}

// 成绩保存响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct SaveMarksResponse {
    pub marks: Vec<TestMark>,
}

// 需进步名单中的一项（任一科目均值低于 40% 入选）
// percentage 是三科均值的算术平均（mean-of-means 口径）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct ImprovementEntry {
    pub id: i64,
    pub name: String,
    pub prn: String,
    pub percentage: f64,
    pub avg_coding: f64,
    pub avg_aptitude: f64,
    pub avg_technical: f64,
}

// 需进步名单响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct ImprovementListResponse {
    pub students: Vec<ImprovementEntry>,
}

// 进步比例（图表用）
// 没有任何成绩的学生计入 satisfactory，与缺勤图表的口径不同
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct ImprovementRatioResponse {
    pub improvement: i64,
    pub satisfactory: i64,
}
