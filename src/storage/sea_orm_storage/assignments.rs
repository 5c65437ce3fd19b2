use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{QuizGenError, Result};
use crate::models::assignments::entities::Assignment;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建或整体替换分配名单
    pub async fn upsert_assignment_impl(
        &self,
        test_id: i64,
        student_emails: Vec<String>,
    ) -> Result<Assignment> {
        let emails = serde_json::to_string(&student_emails)?;

        let existing = Assignments::find()
            .filter(Column::TestId.eq(test_id))
            .one(&self.db)
            .await
            .map_err(|e| QuizGenError::database_operation(format!("查询分配记录失败: {e}")))?;

        let result = match existing {
            Some(record) => {
                let model = ActiveModel {
                    id: Set(record.id),
                    student_emails: Set(emails),
                    ..Default::default()
                };
                model.update(&self.db).await.map_err(|e| {
                    QuizGenError::database_operation(format!("更新分配记录失败: {e}"))
                })?
            }
            None => {
                let model = ActiveModel {
                    test_id: Set(test_id),
                    student_emails: Set(emails),
                    created_at: Set(chrono::Utc::now().timestamp()),
                    ..Default::default()
                };
                model.insert(&self.db).await.map_err(|e| {
                    QuizGenError::database_operation(format!("创建分配记录失败: {e}"))
                })?
            }
        };

        Ok(result.into_assignment())
    }

    /// 获取测验的分配记录
    pub async fn get_assignment_by_test_impl(&self, test_id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find()
            .filter(Column::TestId.eq(test_id))
            .one(&self.db)
            .await
            .map_err(|e| QuizGenError::database_operation(format!("查询分配记录失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 列出包含指定学生邮箱的分配记录
    ///
    /// 名单存储为 JSON 数组文本，按带引号的完整邮箱做包含匹配，
    /// 避免 a@b.com 命中 aa@b.com。
    pub async fn list_assignments_for_email_impl(&self, email: &str) -> Result<Vec<Assignment>> {
        let needle = format!("\"{}\"", email);

        let result = Assignments::find()
            .filter(Column::StudentEmails.contains(&needle))
            .all(&self.db)
            .await
            .map_err(|e| QuizGenError::database_operation(format!("查询分配记录失败: {e}")))?;

        // JSON 文本匹配可能有转义字符等边界情况，反序列化后再次确认
        Ok(result
            .into_iter()
            .map(|m| m.into_assignment())
            .filter(|a| a.contains_email(email))
            .collect())
    }
}
