use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 业务错误码，响应体中与 HTTP 状态码并行返回
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 9001,
    NotFound = 9004,
    RateLimitExceeded = 9029,
    InternalServerError = 9500,

    // 认证授权 1xxx
    Unauthorized = 1001,
    AuthServiceFailed = 1002,
    InvalidSessionId = 1003,
    InvalidRole = 1004,
    PermissionDenied = 1005,

    // 用户 2xxx
    UserNotFound = 2001,

    // 测验 3xxx
    TestNotFound = 3001,
    TestNotPublished = 3002,
    QuestionNotFound = 3003,
    TestCreationFailed = 3004,
    GenerationServiceFailed = 3005,
    GenerationParseFailed = 3006,

    // 分配 4xxx
    AssignmentNotFound = 4001,
    AssignmentFailed = 4002,

    // 班级 5xxx
    ClassNotFound = 5001,
    ClassCreationFailed = 5002,

    // 提交 6xxx
    SubmissionNotFound = 6001,
    SubmissionAlreadyExists = 6002,
    SubmissionFailed = 6003,
}
