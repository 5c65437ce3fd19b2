use serde::Deserialize;
use ts_rs::TS;

// 角色切换请求（来自查询参数）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct SetRoleQuery {
    pub role: String,
}
