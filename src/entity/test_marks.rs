//! 测验成绩实体
//!
//! (student_id, test_id, subject) 是自然键，同一学生同一测验同一科目
//! 重复提交按 upsert 处理，后写覆盖先写并刷新 graded_on。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "test_marks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub test_id: i64,
    pub subject: String,
    pub marks_obtained: f64,
    pub graded_on: i64,
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
        belongs_to = "super::tests::Entity",
        from = "Column::TestId",
        to = "super::tests::Column::Id"
    )]
    Test,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::tests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Test.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_mark(self) -> crate::models::tests::entities::TestMark {
        use crate::models::tests::entities::{Subject, TestMark};
        use chrono::{DateTime, Utc};

        TestMark {
            id: self.id,
            student_id: self.student_id,
            test_id: self.test_id,
            subject: self.subject.parse::<Subject>().unwrap_or(Subject::Coding),
            marks_obtained: self.marks_obtained,
            graded_on: DateTime::<Utc>::from_timestamp(self.graded_on, 0).unwrap_or_default(),
        }
    }
}
