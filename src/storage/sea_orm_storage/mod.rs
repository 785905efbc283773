//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod attendance;
mod divisions;
mod tests;
mod users;

use crate::config::AppConfig;
use crate::errors::{AcadSysError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| AcadSysError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AcadSysError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| AcadSysError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| AcadSysError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AcadSysError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_prn(&self, prn: &str) -> Result<Option<User>> {
        self.get_user_by_prn_impl(prn).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn list_students(&self, filter: StudentFilter) -> Result<Vec<User>> {
        self.list_students_impl(filter).await
    }

    async fn list_users_by_ids(&self, ids: &[i64]) -> Result<Vec<User>> {
        self.list_users_by_ids_impl(ids).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 分组模块
    async fn create_division(&self, division: CreateDivisionRequest) -> Result<Division> {
        self.create_division_impl(division).await
    }

    async fn get_division_by_id(&self, id: i64) -> Result<Option<Division>> {
        self.get_division_by_id_impl(id).await
    }

    async fn find_division(
        &self,
        name: &str,
        year: &str,
        branch: &str,
    ) -> Result<Option<Division>> {
        self.find_division_impl(name, year, branch).await
    }

    async fn list_divisions_by_year(&self, year: &str) -> Result<Vec<Division>> {
        self.list_divisions_by_year_impl(year).await
    }

    async fn list_divisions_by_ids(&self, ids: &[i64]) -> Result<Vec<Division>> {
        self.list_divisions_by_ids_impl(ids).await
    }

    // 指派模块
    async fn create_assignment(
        &self,
        teacher_id: i64,
        division_id: i64,
    ) -> Result<TeacherAssignment> {
        self.create_assignment_impl(teacher_id, division_id).await
    }

    async fn get_assignment(
        &self,
        teacher_id: i64,
        division_id: i64,
    ) -> Result<Option<TeacherAssignment>> {
        self.get_assignment_impl(teacher_id, division_id).await
    }

    async fn list_assignments(&self) -> Result<Vec<TeacherAssignment>> {
        self.list_assignments_impl().await
    }

    async fn list_assignments_by_teacher(&self, teacher_id: i64) -> Result<Vec<TeacherAssignment>> {
        self.list_assignments_by_teacher_impl(teacher_id).await
    }

    // 考勤模块
    async fn upsert_attendance(&self, record: UpsertAttendanceRecord) -> Result<AttendanceRecord> {
        self.upsert_attendance_impl(record).await
    }

    async fn find_attendance(&self, filter: AttendanceFilter) -> Result<Vec<AttendanceRecord>> {
        self.find_attendance_impl(filter).await
    }

    async fn update_attendance_reason(
        &self,
        student_id: i64,
        date: chrono::DateTime<chrono::Utc>,
        reason: &str,
    ) -> Result<Option<AttendanceRecord>> {
        self.update_attendance_reason_impl(student_id, date, reason)
            .await
    }

    // 测验模块
    async fn create_test(&self, test: NewTest) -> Result<Test> {
        self.create_test_impl(test).await
    }

    async fn get_test_by_id(&self, id: i64) -> Result<Option<Test>> {
        self.get_test_by_id_impl(id).await
    }

    async fn list_tests_by_year(&self, year: &str) -> Result<Vec<Test>> {
        self.list_tests_by_year_impl(year).await
    }

    async fn upsert_test_mark(&self, entry: MarkEntry) -> Result<TestMark> {
        self.upsert_test_mark_impl(entry).await
    }

    async fn find_test_marks_with_tests(&self, student_id: i64) -> Result<Vec<(TestMark, Test)>> {
        self.find_test_marks_with_tests_impl(student_id).await
    }

    async fn find_test_marks_with_tests_by_students(
        &self,
        student_ids: &[i64],
    ) -> Result<Vec<(TestMark, Test)>> {
        self.find_test_marks_with_tests_by_students_impl(student_ids)
            .await
    }
}
