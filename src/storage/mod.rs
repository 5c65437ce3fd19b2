use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: NewUser) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 更新用户角色
    async fn update_user_role(&self, id: i64, role: UserRole) -> Result<Option<User>>;

    /// 会话管理方法
    // 写入会话
    async fn create_session(
        &self,
        user_id: i64,
        session_token: &str,
        expires_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Session>;
    // 通过 token 获取会话，过期判断由调用方负责
    async fn get_session_by_token(&self, session_token: &str) -> Result<Option<Session>>;
    // 删除会话
    async fn delete_session_by_token(&self, session_token: &str) -> Result<bool>;

    /// 测验管理方法
    // 创建测验（草稿状态）
    async fn create_test(&self, test: NewTest) -> Result<Test>;
    // 通过ID获取测验
    async fn get_test_by_id(&self, test_id: i64) -> Result<Option<Test>>;
    // 列出教师自己的测验
    async fn list_tests_by_teacher(&self, teacher_id: i64) -> Result<Vec<Test>>;
    // 按 ID 集合列出已发布的测验（学生视角）
    async fn list_published_tests_by_ids(&self, test_ids: &[i64]) -> Result<Vec<Test>>;
    // 整体替换测验的题目列表
    async fn update_test_questions(
        &self,
        test_id: i64,
        questions: Vec<Question>,
    ) -> Result<Option<Test>>;
    // 更新测验状态
    async fn update_test_status(&self, test_id: i64, status: TestStatus) -> Result<bool>;
    // 删除测验，级联删除其分配记录
    async fn delete_test(&self, test_id: i64) -> Result<bool>;

    /// 分配管理方法
    // 创建或整体替换分配名单
    async fn upsert_assignment(
        &self,
        test_id: i64,
        student_emails: Vec<String>,
    ) -> Result<Assignment>;
    // 获取测验的分配记录
    async fn get_assignment_by_test(&self, test_id: i64) -> Result<Option<Assignment>>;
    // 列出包含指定学生邮箱的分配记录
    async fn list_assignments_for_email(&self, email: &str) -> Result<Vec<Assignment>>;

    /// 班级管理方法
    // 创建班级，班级码由调用方生成
    async fn create_class(
        &self,
        teacher_id: i64,
        class: CreateClassRequest,
        class_code: &str,
    ) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 列出教师的班级
    async fn list_classes_by_teacher(&self, teacher_id: i64) -> Result<Vec<Class>>;
    // 更新班级信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 删除班级
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 提交管理方法
    // 写入提交；(test_id, student_id) 唯一约束冲突返回 UniqueViolation
    async fn create_submission(&self, submission: NewSubmission) -> Result<Submission>;
    // 获取某学生对某测验的提交
    async fn get_submission(&self, test_id: i64, student_id: i64) -> Result<Option<Submission>>;
    // 列出测验的全部提交
    async fn list_submissions_by_test(&self, test_id: i64) -> Result<Vec<Submission>>;
    // 列出学生的全部提交
    async fn list_submissions_by_student(&self, student_id: i64) -> Result<Vec<Submission>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
