//! 请求参数解析失败时的统一响应

use actix_web::error::{InternalError, JsonPayloadError, PathError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

// JSON 请求体无法解析
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("Invalid JSON payload for {}: {}", req.path(), err);

    let message = match &err {
        JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "Request body is too large".to_string()
        }
        _ => format!("Malformed JSON body: {err}"),
    };

    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(err, response).into()
}

// 路径参数无法解析（例如 ID 不是整数）
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    debug!("Invalid path parameter for {}: {}", req.path(), err);

    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::InvalidArgument,
        format!("Invalid path parameter: {err}"),
    ));
    InternalError::from_response(err, response).into()
}
