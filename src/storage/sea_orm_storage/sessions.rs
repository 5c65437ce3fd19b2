use super::SeaOrmStorage;
use crate::entity::sessions::{ActiveModel, Column, Entity as Sessions};
use crate::errors::{QuizGenError, Result};
use crate::models::auth::entities::Session;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 写入会话
    pub async fn create_session_impl(
        &self,
        user_id: i64,
        session_token: &str,
        expires_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Session> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            session_token: Set(session_token.to_string()),
            expires_at: Set(expires_at.timestamp()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| QuizGenError::database_operation(format!("写入会话失败: {e}")))?;

        Ok(result.into_session())
    }

    /// 通过 token 获取会话
    pub async fn get_session_by_token_impl(&self, session_token: &str) -> Result<Option<Session>> {
        let result = Sessions::find()
            .filter(Column::SessionToken.eq(session_token))
            .one(&self.db)
            .await
            .map_err(|e| QuizGenError::database_operation(format!("查询会话失败: {e}")))?;

        Ok(result.map(|m| m.into_session()))
    }

    /// 删除会话
    pub async fn delete_session_by_token_impl(&self, session_token: &str) -> Result<bool> {
        let result = Sessions::delete_many()
            .filter(Column::SessionToken.eq(session_token))
            .exec(&self.db)
            .await
            .map_err(|e| QuizGenError::database_operation(format!("删除会话失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
