use actix_web::{HttpResponse, Result as ActixResult, web};

use super::error_response;
use crate::models::ApiResponse;
use crate::models::enrollments::records::EnrollmentRecord;
use crate::services::EnrollmentService;

pub async fn list_enrollments(service: web::Data<EnrollmentService>) -> ActixResult<HttpResponse> {
    match service.list_all_enrollments().await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            records,
            "Enrollments retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn create_enrollment(
    service: web::Data<EnrollmentService>,
    record: web::Json<Option<EnrollmentRecord>>,
) -> ActixResult<HttpResponse> {
    match service.create_enrollment(record.into_inner()).await {
        Ok(created) => Ok(HttpResponse::Created().json(ApiResponse::success(
            created,
            "Enrollment created successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn get_enrollment(
    service: web::Data<EnrollmentService>,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    match service.get_enrollment_by_id(id.into_inner()).await {
        Ok(found) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            found,
            "Enrollment retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn delete_enrollment(
    service: web::Data<EnrollmentService>,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    match service.delete_enrollment(id.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Enrollment deleted successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

// 选课记录只支持增删查，没有 PUT
pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/enrollments")
            .service(
                web::resource("")
                    .route(web::get().to(list_enrollments))
                    .route(web::post().to(create_enrollment)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_enrollment))
                    .route(web::delete().to(delete_enrollment)),
            ),
    );
}
