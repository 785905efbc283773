//! 测验实体
//!
//! total_marks 是整场测验的满分，按三个固定科目平分（每科 total_marks / 3）。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub year: String,
    pub date: i64,
    pub total_marks: f64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::test_marks::Entity")]
    TestMarks,
}

impl Related<super::test_marks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestMarks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_test(self) -> crate::models::tests::entities::Test {
        use chrono::{DateTime, Utc};

        crate::models::tests::entities::Test {
            id: self.id,
            name: self.name,
            year: self.year,
            date: DateTime::<Utc>::from_timestamp(self.date, 0).unwrap_or_default(),
            total_marks: self.total_marks,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
