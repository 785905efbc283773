//! 请求参数错误处理器
//!
//! JSON 反序列化和查询参数解析失败时，返回统一的响应封装而不是
//! actix-web 默认的纯文本错误。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON payload error on {}: {}", req.path(), err);

    let message = match &err {
        JsonPayloadError::ContentType => "请求体必须是 application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("请求体解析失败: {e}"),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "请求体过大".to_string()
        }
        other => format!("请求体错误: {other}"),
    };

    let response =
        HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query payload error on {}: {}", req.path(), err);

    let message = match &err {
        QueryPayloadError::Deserialize(e) => format!("查询参数解析失败: {e}"),
        other => format!("查询参数错误: {other}"),
    };

    let response =
        HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(err, response).into()
}
