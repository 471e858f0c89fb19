pub mod courses;
pub mod enrollments;
pub mod students;
pub mod teachers;

use actix_web::HttpResponse;
use tracing::error;

use crate::errors::SchoolSystemError;
use crate::models::{ApiResponse, ErrorCode};

pub use courses::configure_course_routes;
pub use enrollments::configure_enrollment_routes;
pub use students::configure_student_routes;
pub use teachers::configure_teacher_routes;

/// 将服务层错误转换为 HTTP 响应
pub fn error_response(err: &SchoolSystemError) -> HttpResponse {
    match err {
        SchoolSystemError::Validation(msg) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)),
        SchoolSystemError::InvalidArgument(msg) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidArgument, msg)),
        SchoolSystemError::NotFound(msg) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(ErrorCode::NotFound, msg))
        }
        SchoolSystemError::ReferenceNotFound(msg) => HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ReferenceNotFound, msg)),
        SchoolSystemError::ConstraintViolation(msg) => HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::ConstraintViolation, msg)),
        _ => {
            error!("{}", err.format_simple());
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Internal server error",
            ))
        }
    }
}
