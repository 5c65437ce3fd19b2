//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod classes;
mod sessions;
mod submissions;
mod tests;
mod users;

use crate::config::AppConfig;
use crate::errors::{QuizGenError, Result};
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
            .map_err(|e| QuizGenError::database_operation(format!("数据库迁移失败: {e}")))?;

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
            .map_err(|e| QuizGenError::database_config(format!("SQLite URL 解析失败: {e}")))?
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
            .map_err(|e| QuizGenError::database_connection(format!("SQLite 连接失败: {e}")))?;

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
            .map_err(|e| QuizGenError::database_connection(format!("无法连接到数据库: {e}")))
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
            Err(QuizGenError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::entities::Assignment,
    auth::entities::Session,
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
    },
    submissions::entities::{NewSubmission, Submission},
    tests::entities::{NewTest, Question, Test, TestStatus},
    users::entities::{NewUser, User, UserRole},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: NewUser) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn update_user_role(&self, id: i64, role: UserRole) -> Result<Option<User>> {
        self.update_user_role_impl(id, role).await
    }

    // 会话模块
    async fn create_session(
        &self,
        user_id: i64,
        session_token: &str,
        expires_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Session> {
        self.create_session_impl(user_id, session_token, expires_at)
            .await
    }

    async fn get_session_by_token(&self, session_token: &str) -> Result<Option<Session>> {
        self.get_session_by_token_impl(session_token).await
    }

    async fn delete_session_by_token(&self, session_token: &str) -> Result<bool> {
        self.delete_session_by_token_impl(session_token).await
    }

    // 测验模块
    async fn create_test(&self, test: NewTest) -> Result<Test> {
        self.create_test_impl(test).await
    }

    async fn get_test_by_id(&self, test_id: i64) -> Result<Option<Test>> {
        self.get_test_by_id_impl(test_id).await
    }

    async fn list_tests_by_teacher(&self, teacher_id: i64) -> Result<Vec<Test>> {
        self.list_tests_by_teacher_impl(teacher_id).await
    }

    async fn list_published_tests_by_ids(&self, test_ids: &[i64]) -> Result<Vec<Test>> {
        self.list_published_tests_by_ids_impl(test_ids).await
    }

    async fn update_test_questions(
        &self,
        test_id: i64,
        questions: Vec<Question>,
    ) -> Result<Option<Test>> {
        self.update_test_questions_impl(test_id, questions).await
    }

    async fn update_test_status(&self, test_id: i64, status: TestStatus) -> Result<bool> {
        self.update_test_status_impl(test_id, status).await
    }

    async fn delete_test(&self, test_id: i64) -> Result<bool> {
        self.delete_test_impl(test_id).await
    }

    // 分配模块
    async fn upsert_assignment(
        &self,
        test_id: i64,
        student_emails: Vec<String>,
    ) -> Result<Assignment> {
        self.upsert_assignment_impl(test_id, student_emails).await
    }

    async fn get_assignment_by_test(&self, test_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_test_impl(test_id).await
    }

    async fn list_assignments_for_email(&self, email: &str) -> Result<Vec<Assignment>> {
        self.list_assignments_for_email_impl(email).await
    }

    // 班级模块
    async fn create_class(
        &self,
        teacher_id: i64,
        class: CreateClassRequest,
        class_code: &str,
    ) -> Result<Class> {
        self.create_class_impl(teacher_id, class, class_code).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn list_classes_by_teacher(&self, teacher_id: i64) -> Result<Vec<Class>> {
        self.list_classes_by_teacher_impl(teacher_id).await
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    // 提交模块
    async fn create_submission(&self, submission: NewSubmission) -> Result<Submission> {
        self.create_submission_impl(submission).await
    }

    async fn get_submission(&self, test_id: i64, student_id: i64) -> Result<Option<Submission>> {
        self.get_submission_impl(test_id, student_id).await
    }

    async fn list_submissions_by_test(&self, test_id: i64) -> Result<Vec<Submission>> {
        self.list_submissions_by_test_impl(test_id).await
    }

    async fn list_submissions_by_student(&self, student_id: i64) -> Result<Vec<Submission>> {
        self.list_submissions_by_student_impl(student_id).await
    }
}
