use super::entities::AttendanceStatus;
use serde::Deserialize;
use ts_rs::TS;

// 单个学生的考勤提交项
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub reason: String,
}

// 学生查询自己某天考勤的参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct StudentAttendanceParams {
    pub date: Option<String>,
}

// 学生补充请假原因请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct UpdateReasonRequest {
    pub date: Option<String>,
    pub reason: Option<String>,
}

// 教师查询分组某天考勤的参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct DivisionAttendanceParams {
    pub division_id: Option<i64>,
    pub date: Option<String>,
}

// 缺勤者查询参数，month 形如 "YYYY-MM"
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct DefaulterParams {
    pub division_id: Option<i64>,
    pub month: Option<String>,
}

// 考勤记录查询条件（用于存储层），所有字段可选、按与组合
#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    pub student_id: Option<i64>,
    pub division_id: Option<i64>,
    pub division_ids: Option<Vec<i64>>,
    pub year: Option<String>,
    pub status: Option<AttendanceStatus>,
    /// 含两端的时间范围
    pub date_from: Option<chrono::DateTime<chrono::Utc>>,
    pub date_to: Option<chrono::DateTime<chrono::Utc>>,
}

// 考勤 upsert 载荷（用于存储层）
// year/branch/division_id 由调用方从学生快照
#[derive(Debug, Clone)]
pub struct UpsertAttendanceRecord {
    pub student_id: i64,
    pub year: String,
    pub branch: String,
    pub division_id: i64,
    pub date: chrono::DateTime<chrono::Utc>,
    pub status: AttendanceStatus,
    pub reason: String,
    pub recorded_by: i64,
}
