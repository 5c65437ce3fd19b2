use serde::{Deserialize, Serialize};

// 会话实体，token 由外部身份服务签发
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub session_token: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Session {
    /// 过期会话视为不存在，统一按 UTC 比较
    pub fn is_expired(&self) -> bool {
        self.expires_at < chrono::Utc::now()
    }
}

/// 身份服务返回的会话数据
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalSessionData {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    pub session_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_session_expiry() {
        let session = Session {
            id: 1,
            user_id: 1,
            session_token: "tok".into(),
            expires_at: Utc::now() - Duration::seconds(1),
            created_at: Utc::now() - Duration::days(8),
        };
        assert!(session.is_expired());

        let session = Session {
            expires_at: Utc::now() + Duration::days(7),
            ..session
        };
        assert!(!session.is_expired());
    }
}
