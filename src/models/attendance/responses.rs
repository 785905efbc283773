use super::entities::AttendanceStatus;
use serde::Serialize;
use ts_rs::TS;

// 学生查询自己某天考勤的响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceStatusResponse {
    pub status: AttendanceStatus,
    pub reason: String,
}

// 批量保存考勤的响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct SaveAttendanceResponse {
    pub saved: i64,
}

// 教师分组日视图中的一条记录（带学生姓名与 PRN）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceViewEntry {
    pub student_id: i64,
    pub name: String,
    pub prn: String,
    pub status: AttendanceStatus,
    pub reason: String,
    pub date: chrono::DateTime<chrono::Utc>,
}

// 日视图响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceViewResponse {
    pub records: Vec<AttendanceViewEntry>,
}

// 缺勤者列表中的一项
// 列表顺序是记录的首次出现顺序，不按百分比排序
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct DefaulterEntry {
    pub student_id: i64,
    pub name: String,
    pub prn: String,
    pub attendance_percentage: f64,
}

// 缺勤者列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct DefaulterListResponse {
    pub defaulters: Vec<DefaulterEntry>,
}

// 缺勤比例（图表用）
// 没有任何考勤记录的学生计入 defaulters（0% < 70%）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct DefaulterRatioResponse {
    pub defaulters: i64,
    pub non_defaulters: i64,
}
