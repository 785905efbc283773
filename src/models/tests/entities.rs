use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 测验科目，固定三科
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub enum Subject {
    Coding,
    Aptitude,
    Technical,
}

impl Subject {
    pub const CODING: &'static str = "Coding";
    pub const APTITUDE: &'static str = "Aptitude";
    pub const TECHNICAL: &'static str = "Technical";

    /// 三个科目的固定顺序，聚合输出按这个顺序
    pub fn all() -> &'static [Subject] {
        &[Subject::Coding, Subject::Aptitude, Subject::Technical]
    }

    /// 科目数量，测验满分按这个数平分
    pub const COUNT: f64 = 3.0;
}

impl<'de> Deserialize<'de> for Subject {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Subject::CODING => Ok(Subject::Coding),
            Subject::APTITUDE => Ok(Subject::Aptitude),
            Subject::TECHNICAL => Ok(Subject::Technical),
            _ => Err(serde::de::Error::custom(format!(
                "无效的科目: '{s}'. 支持的科目: Coding, Aptitude, Technical"
            ))),
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subject::Coding => write!(f, "{}", Subject::CODING),
            Subject::Aptitude => write!(f, "{}", Subject::APTITUDE),
            Subject::Technical => write!(f, "{}", Subject::TECHNICAL),
        }
    }
}

impl std::str::FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Coding" => Ok(Subject::Coding),
            "Aptitude" => Ok(Subject::Aptitude),
            "Technical" => Ok(Subject::Technical),
            _ => Err(format!("Invalid subject: {s}")),
        }
    }
}

// 测验实体，创建后不可修改
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct Test {
    pub id: i64,
    pub name: String,
    pub year: String,
    pub date: chrono::DateTime<chrono::Utc>,
    pub total_marks: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 测验成绩实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestMark {
    pub id: i64,
    pub student_id: i64,
    pub test_id: i64,
    pub subject: Subject,
    pub marks_obtained: f64,
    pub graded_on: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_round_trip() {
        for subject in Subject::all() {
            assert_eq!(
                subject.to_string().parse::<Subject>().as_ref(),
                Ok(subject),
                "subject {subject} should round-trip"
            );
        }
    }

    #[test]
    fn test_unknown_subject_rejected() {
        assert!("Maths".parse::<Subject>().is_err());
    }
}
