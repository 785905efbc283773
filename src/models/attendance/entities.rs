use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考勤状态
// 存储值与历史数据保持一致，首字母大写
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub enum AttendanceStatus {
    Present, // 出勤
    Absent,  // 缺勤
    Late,    // 迟到
}

impl AttendanceStatus {
    pub const PRESENT: &'static str = "Present";
    pub const ABSENT: &'static str = "Absent";
    pub const LATE: &'static str = "Late";
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            AttendanceStatus::PRESENT => Ok(AttendanceStatus::Present),
            AttendanceStatus::ABSENT => Ok(AttendanceStatus::Absent),
            AttendanceStatus::LATE => Ok(AttendanceStatus::Late),
            _ => Err(serde::de::Error::custom(format!(
                "无效的考勤状态: '{s}'. 支持的状态: Present, Absent, Late"
            ))),
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "{}", AttendanceStatus::PRESENT),
            AttendanceStatus::Absent => write!(f, "{}", AttendanceStatus::ABSENT),
            AttendanceStatus::Late => write!(f, "{}", AttendanceStatus::LATE),
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Present" => Ok(AttendanceStatus::Present),
            "Absent" => Ok(AttendanceStatus::Absent),
            "Late" => Ok(AttendanceStatus::Late),
            _ => Err(format!("Invalid attendance status: {s}")),
        }
    }
}

// 考勤记录实体
// year/branch/division_id 为写入时从学生快照的值
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_id: i64,
    pub year: String,
    pub branch: String,
    pub division_id: i64,
    pub date: chrono::DateTime<chrono::Utc>,
    pub status: AttendanceStatus,
    pub reason: String,
    pub recorded_by: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
        ] {
            assert_eq!(
                status.to_string().parse::<AttendanceStatus>(),
                Ok(status),
                "status {status} should round-trip"
            );
        }
    }

    #[test]
    fn test_lowercase_status_rejected() {
        assert!("present".parse::<AttendanceStatus>().is_err());
    }
}
