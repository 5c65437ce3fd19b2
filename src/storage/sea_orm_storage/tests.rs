use super::SeaOrmStorage;
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::tests::{ActiveModel, Column, Entity as Tests};
use crate::errors::{QuizGenError, Result};
use crate::models::tests::entities::{NewTest, Question, Test, TestStatus};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建测验（草稿状态）
    pub async fn create_test_impl(&self, req: NewTest) -> Result<Test> {
        let now = chrono::Utc::now().timestamp();
        let questions = serde_json::to_string(&req.questions)?;

        let model = ActiveModel {
            title: Set(req.title),
            teacher_id: Set(req.teacher_id),
            resource_description: Set(req.resource_description),
            questions: Set(questions),
            status: Set(TestStatus::Draft.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| QuizGenError::database_operation(format!("创建测验失败: {e}")))?;

        Ok(result.into_test())
    }

    /// 通过 ID 获取测验
    pub async fn get_test_by_id_impl(&self, test_id: i64) -> Result<Option<Test>> {
        let result = Tests::find_by_id(test_id)
            .one(&self.db)
            .await
            .map_err(|e| QuizGenError::database_operation(format!("查询测验失败: {e}")))?;

        Ok(result.map(|m| m.into_test()))
    }

    /// 列出教师自己的测验
    pub async fn list_tests_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Test>> {
        let result = Tests::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| QuizGenError::database_operation(format!("查询测验列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_test()).collect())
    }

    /// 按 ID 集合列出已发布的测验
    pub async fn list_published_tests_by_ids_impl(&self, test_ids: &[i64]) -> Result<Vec<Test>> {
        if test_ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = Tests::find()
            .filter(Column::Id.is_in(test_ids.iter().copied()))
            .filter(Column::Status.eq(TestStatus::Published.to_string()))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| QuizGenError::database_operation(format!("查询测验列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_test()).collect())
    }

    /// 整体替换测验的题目列表
    pub async fn update_test_questions_impl(
        &self,
        test_id: i64,
        questions: Vec<Question>,
    ) -> Result<Option<Test>> {
        let existing = self.get_test_by_id_impl(test_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(test_id),
            questions: Set(serde_json::to_string(&questions)?),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| QuizGenError::database_operation(format!("更新题目失败: {e}")))?;

        self.get_test_by_id_impl(test_id).await
    }

    /// 更新测验状态
    pub async fn update_test_status_impl(&self, test_id: i64, status: TestStatus) -> Result<bool> {
        let result = Tests::update_many()
            .col_expr(
                Column::Status,
                sea_orm::sea_query::Expr::value(status.to_string()),
            )
            .filter(Column::Id.eq(test_id))
            .exec(&self.db)
            .await
            .map_err(|e| QuizGenError::database_operation(format!("更新测验状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 删除测验及其分配记录
    pub async fn delete_test_impl(&self, test_id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| QuizGenError::database_operation(format!("开启事务失败: {e}")))?;

        Assignments::delete_many()
            .filter(AssignmentColumn::TestId.eq(test_id))
            .exec(&txn)
            .await
            .map_err(|e| QuizGenError::database_operation(format!("删除分配记录失败: {e}")))?;

        let result = Tests::delete_by_id(test_id)
            .exec(&txn)
            .await
            .map_err(|e| QuizGenError::database_operation(format!("删除测验失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| QuizGenError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
