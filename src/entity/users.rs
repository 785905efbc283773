//! 用户实体
//!
//! 管理员、教师和学生统一存放在 users 表中，按 role 区分。
//! year/branch/designation 只对教师有意义，division_id/prn 只对学生有意义。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub role: String,
    pub status: String,
    pub name: Option<String>,
    pub year: Option<String>,
    pub branch: Option<String>,
    pub designation: Option<String>,
    pub division_id: Option<i64>,
    #[sea_orm(unique)]
    pub prn: Option<String>,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::divisions::Entity",
        from = "Column::DivisionId",
        to = "super::divisions::Column::Id"
    )]
    Division,
    #[sea_orm(has_many = "super::teacher_assignments::Entity")]
    TeacherAssignments,
    #[sea_orm(has_many = "super::test_marks::Entity")]
    TestMarks,
}

impl Related<super::divisions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Division.def()
    }
}

impl Related<super::teacher_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherAssignments.def()
    }
}

impl Related<super::test_marks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestMarks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::users::entities::{AcademicProfile, User, UserRole, UserStatus};
        use chrono::{DateTime, Utc};

        User {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role.parse::<UserRole>().unwrap_or(UserRole::Student),
            status: self
                .status
                .parse::<UserStatus>()
                .unwrap_or(UserStatus::Active),
            profile: AcademicProfile {
                name: self.name.unwrap_or_default(),
                year: self.year,
                branch: self.branch,
                designation: self.designation,
                division_id: self.division_id,
                prn: self.prn,
            },
            last_login: self
                .last_login
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
