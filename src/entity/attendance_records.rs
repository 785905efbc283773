//! 考勤记录实体
//!
//! (student_id, date) 是自然键，每个学生每天至多一条记录。
//! year/branch/division_id 为写入时从学生快照的值（值拷贝，不做实时关联），
//! 学生后续换组不影响历史记录。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub year: String,
    pub branch: String,
    pub division_id: i64,
    pub date: i64,
    pub status: String,
    pub reason: String,
    pub recorded_by: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::divisions::Entity",
        from = "Column::DivisionId",
        to = "super::divisions::Column::Id"
    )]
    Division,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::divisions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Division.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_record(self) -> crate::models::attendance::entities::AttendanceRecord {
        use crate::models::attendance::entities::{AttendanceRecord, AttendanceStatus};
        use chrono::{DateTime, Utc};

        AttendanceRecord {
            id: self.id,
            student_id: self.student_id,
            year: self.year,
            branch: self.branch,
            division_id: self.division_id,
            date: DateTime::<Utc>::from_timestamp(self.date, 0).unwrap_or_default(),
            status: self
                .status
                .parse::<AttendanceStatus>()
                .unwrap_or(AttendanceStatus::Absent),
            reason: self.reason,
            recorded_by: self.recorded_by,
        }
    }
}
