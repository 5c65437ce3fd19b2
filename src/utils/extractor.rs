//! 路径参数安全提取器
//!
//! 在进入处理程序之前完成路径参数的解析与基本校验，
//! 非法参数直接返回带统一响应体的 400。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(name: &str) -> actix_web::Error {
    InternalError::from_response(
        format!("invalid path parameter: {name}"),
        HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
            ErrorCode::BadRequest,
            format!("Invalid {name}"),
        )),
    )
    .into()
}

fn parse_path_i64(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    req.match_info()
        .get(name)
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| bad_request(name))
}

macro_rules! declare_i64_extractor {
    ($extractor:ident, $param:literal) => {
        /// 路径参数提取器，要求为正整数
        #[derive(Debug, Clone, Copy)]
        pub struct $extractor(pub i64);

        impl FromRequest for $extractor {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                ready(parse_path_i64(req, $param).map($extractor))
            }
        }
    };
}

declare_i64_extractor!(SafeTestIdI64, "test_id");
declare_i64_extractor!(SafeClassIdI64, "class_id");
declare_i64_extractor!(SafeUserIdI64, "student_id");

/// 题目 ID 提取器（UUID 文本，非空且有长度上限）
#[derive(Debug, Clone)]
pub struct SafeQuestionId(pub String);

impl FromRequest for SafeQuestionId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("question_id")
            .filter(|raw| !raw.is_empty() && raw.len() <= 64)
            .map(|raw| SafeQuestionId(raw.to_string()))
            .ok_or_else(|| bad_request("question_id"));
        ready(result)
    }
}
