use actix_web::{HttpResponse, Result as ActixResult, web};

use super::error_response;
use crate::models::ApiResponse;
use crate::models::courses::records::CourseRecord;
use crate::services::CourseService;

// HTTP处理程序
pub async fn list_courses(service: web::Data<CourseService>) -> ActixResult<HttpResponse> {
    match service.list_all_courses().await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            records,
            "Courses retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn create_course(
    service: web::Data<CourseService>,
    record: web::Json<Option<CourseRecord>>,
) -> ActixResult<HttpResponse> {
    match service.create_course(record.into_inner()).await {
        Ok(created) => Ok(HttpResponse::Created().json(ApiResponse::success(
            created,
            "Course created successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn get_course(
    service: web::Data<CourseService>,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    match service.get_course_by_id(id.into_inner()).await {
        Ok(found) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            found,
            "Course retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn update_course(
    service: web::Data<CourseService>,
    id: web::Path<i64>,
    record: web::Json<Option<CourseRecord>>,
) -> ActixResult<HttpResponse> {
    match service
        .update_course(id.into_inner(), record.into_inner())
        .await
    {
        Ok(updated) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            updated,
            "Course updated successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn delete_course(
    service: web::Data<CourseService>,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    match service.delete_course(id.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Course deleted successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .service(
                web::resource("")
                    .route(web::get().to(list_courses))
                    .route(web::post().to(create_course)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_course))
                    .route(web::put().to(update_course))
                    .route(web::delete().to(delete_course)),
            ),
    );
}
