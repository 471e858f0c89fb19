use actix_web::{HttpResponse, Result as ActixResult, web};

use super::error_response;
use crate::models::ApiResponse;
use crate::models::teachers::records::TeacherRecord;
use crate::services::TeacherService;

// HTTP处理程序
pub async fn list_teachers(service: web::Data<TeacherService>) -> ActixResult<HttpResponse> {
    match service.list_all_teachers().await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            records,
            "Teachers retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn create_teacher(
    service: web::Data<TeacherService>,
    record: web::Json<Option<TeacherRecord>>,
) -> ActixResult<HttpResponse> {
    match service.create_teacher(record.into_inner()).await {
        Ok(created) => Ok(HttpResponse::Created().json(ApiResponse::success(
            created,
            "Teacher created successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn get_teacher(
    service: web::Data<TeacherService>,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    match service.get_teacher_by_id(id.into_inner()).await {
        Ok(found) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            found,
            "Teacher retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn update_teacher(
    service: web::Data<TeacherService>,
    id: web::Path<i64>,
    record: web::Json<Option<TeacherRecord>>,
) -> ActixResult<HttpResponse> {
    match service
        .update_teacher(id.into_inner(), record.into_inner())
        .await
    {
        Ok(updated) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            updated,
            "Teacher updated successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn delete_teacher(
    service: web::Data<TeacherService>,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    match service.delete_teacher(id.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Teacher deleted successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

// 配置路由
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teachers")
            .service(
                web::resource("")
                    .route(web::get().to(list_teachers))
                    .route(web::post().to(create_teacher)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_teacher))
                    .route(web::put().to(update_teacher))
                    .route(web::delete().to(delete_teacher)),
            ),
    );
}
