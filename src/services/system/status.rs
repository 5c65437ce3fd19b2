use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde::Serialize;
use ts_rs::TS;

use crate::models::{ApiResponse, AppStartTime};

// 服务状态响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct StatusResponse {
    pub message: String,
    pub version: String,
    pub uptime_seconds: i64,
}

/// 存活探测，顺带报运行时长
pub async fn handle_status(request: HttpRequest) -> ActixResult<HttpResponse> {
    let uptime_seconds = request
        .app_data::<actix_web::web::Data<AppStartTime>>()
        .map(|start| {
            chrono::Utc::now()
                .signed_duration_since(start.start_datetime)
                .num_seconds()
        })
        .unwrap_or(0);

    let status = StatusResponse {
        message: "Quiz Generator API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::<StatusResponse>::success(status, "OK")))
}
