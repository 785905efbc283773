use std::sync::Arc;

use crate::models::{
    assignments::entities::TeacherAssignment,
    attendance::{
        entities::AttendanceRecord,
        requests::{AttendanceFilter, UpsertAttendanceRecord},
    },
    divisions::{entities::Division, requests::CreateDivisionRequest},
    tests::{
        entities::{Test, TestMark},
        requests::{MarkEntry, NewTest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, StudentFilter, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（管理员 / 教师 / 学生）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过 PRN 获取学生信息
    async fn get_user_by_prn(&self, prn: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 按条件列出学生（分组 / 年级）
    async fn list_students(&self, filter: StudentFilter) -> Result<Vec<User>>;
    // 按ID批量获取用户
    async fn list_users_by_ids(&self, ids: &[i64]) -> Result<Vec<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 分组管理方法
    // 创建分组
    async fn create_division(&self, division: CreateDivisionRequest) -> Result<Division>;
    // 通过ID获取分组
    async fn get_division_by_id(&self, id: i64) -> Result<Option<Division>>;
    // 通过 (name, year, branch) 获取分组
    async fn find_division(&self, name: &str, year: &str, branch: &str)
    -> Result<Option<Division>>;
    // 列出某年级的分组
    async fn list_divisions_by_year(&self, year: &str) -> Result<Vec<Division>>;
    // 按ID批量获取分组
    async fn list_divisions_by_ids(&self, ids: &[i64]) -> Result<Vec<Division>>;

    /// 教师指派方法
    // 指派教师到分组
    async fn create_assignment(&self, teacher_id: i64, division_id: i64)
    -> Result<TeacherAssignment>;
    // 查询某教师对某分组的指派
    async fn get_assignment(
        &self,
        teacher_id: i64,
        division_id: i64,
    ) -> Result<Option<TeacherAssignment>>;
    // 列出全部指派，新的在前
    async fn list_assignments(&self) -> Result<Vec<TeacherAssignment>>;
    // 列出某教师的全部指派，新的在前
    async fn list_assignments_by_teacher(&self, teacher_id: i64)
    -> Result<Vec<TeacherAssignment>>;

    /// 考勤方法
    // 按 (student, date) 自然键 upsert，后写覆盖先写
    async fn upsert_attendance(&self, record: UpsertAttendanceRecord) -> Result<AttendanceRecord>;
    // 按条件查询考勤记录，保持插入顺序
    async fn find_attendance(&self, filter: AttendanceFilter) -> Result<Vec<AttendanceRecord>>;
    // 更新某学生某天的请假原因
    async fn update_attendance_reason(
        &self,
        student_id: i64,
        date: chrono::DateTime<chrono::Utc>,
        reason: &str,
    ) -> Result<Option<AttendanceRecord>>;

    /// 测验方法
    // 创建测验
    async fn create_test(&self, test: NewTest) -> Result<Test>;
    // 通过ID获取测验
    async fn get_test_by_id(&self, id: i64) -> Result<Option<Test>>;
    // 列出某年级的测验，按日期倒序
    async fn list_tests_by_year(&self, year: &str) -> Result<Vec<Test>>;
    // 按 (student, test, subject) 自然键 upsert 成绩，更新时刷新 graded_on
    async fn upsert_test_mark(&self, entry: MarkEntry) -> Result<TestMark>;
    // 查询一个学生的全部成绩（带所属测验）
    async fn find_test_marks_with_tests(&self, student_id: i64) -> Result<Vec<(TestMark, Test)>>;
    // 批量查询多个学生的全部成绩（带所属测验）
    async fn find_test_marks_with_tests_by_students(
        &self,
        student_ids: &[i64],
    ) -> Result<Vec<(TestMark, Test)>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
