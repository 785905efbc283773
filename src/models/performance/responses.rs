use crate::models::attendance::responses::DefaulterEntry;
use crate::models::tests::entities::Subject;
use crate::models::tests::responses::ImprovementEntry;
use serde::Serialize;
use ts_rs::TS;

// 三科均值，键名与历史数据一致（首字母大写）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/performance.ts")]
pub struct SubjectPerformance {
    #[serde(rename = "Coding")]
    pub coding: f64,
    #[serde(rename = "Aptitude")]
    pub aptitude: f64,
    #[serde(rename = "Technical")]
    pub technical: f64,
}

// 学生成绩综合视图（学生自查 / 教师查看单个学生共用）
// attendance 为无时间范围的全量考勤百分比，
// overall_percentage 为按分值加权的总体百分比，全部保留两位小数
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/performance.ts")]
pub struct StudentSummaryResponse {
    pub name: String,
    pub prn: String,
    pub attendance: f64,
    pub subject_performance: SubjectPerformance,
    pub overall_percentage: f64,
}

// 分组全量考勤汇总（教师视图，无时间范围）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/performance.ts")]
pub struct DivisionAttendanceSummary {
    pub division_id: i64,
    pub division_name: String,
    pub year: String,
    pub branch: String,
    pub attendance_percentage: f64,
}

// 分组-科目平均原始分（教师视图）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/performance.ts")]
pub struct DivisionSubjectAverage {
    pub division_id: i64,
    pub division_name: String,
    pub year: String,
    pub branch: String,
    pub subject: Subject,
    pub average_marks: f64,
}

// 缺勤报表载荷（交给外部的报表渲染器）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/performance.ts")]
pub struct DefaulterReportResponse {
    pub division_name: String,
    pub month: String,
    pub defaulters: Vec<DefaulterEntry>,
}

// 进步报表载荷（mean-of-means 低于 50% 的口径）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/performance.ts")]
pub struct ImprovementReportResponse {
    pub division_name: String,
    pub students: Vec<ImprovementEntry>,
}
