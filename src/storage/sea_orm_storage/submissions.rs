use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{QuizGenError, Result};
use crate::models::submissions::entities::{NewSubmission, Submission};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 写入提交
    ///
    /// (test_id, student_id) 上有唯一索引，并发重复提交由数据库兜底，
    /// 冲突映射为 UniqueViolation 交由服务层转成业务错误。
    pub async fn create_submission_impl(&self, req: NewSubmission) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            test_id: Set(req.test_id),
            student_id: Set(req.student_id),
            answers: Set(serde_json::to_string(&req.answers)?),
            score: Set(req.score),
            standards_breakdown: Set(serde_json::to_string(&req.standards_breakdown)?),
            submitted_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            let msg = e.to_string();
            if msg.contains("UNIQUE constraint failed") || msg.contains("duplicate key value") {
                QuizGenError::unique_violation(format!("重复提交: {msg}"))
            } else {
                QuizGenError::database_operation(format!("写入提交失败: {msg}"))
            }
        })?;

        Ok(result.into_submission())
    }

    /// 获取某学生对某测验的提交
    pub async fn get_submission_impl(
        &self,
        test_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::TestId.eq(test_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| QuizGenError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 列出测验的全部提交
    pub async fn list_submissions_by_test_impl(&self, test_id: i64) -> Result<Vec<Submission>> {
        let result = Submissions::find()
            .filter(Column::TestId.eq(test_id))
            .order_by_desc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| QuizGenError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 列出学生的全部提交
    pub async fn list_submissions_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<Submission>> {
        let result = Submissions::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| QuizGenError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_submission()).collect())
    }
}
