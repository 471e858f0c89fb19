use actix_web::{HttpResponse, Result as ActixResult, web};

use super::error_response;
use crate::models::ApiResponse;
use crate::models::students::records::StudentRecord;
use crate::services::StudentService;

// HTTP处理程序
pub async fn list_students(service: web::Data<StudentService>) -> ActixResult<HttpResponse> {
    match service.list_all_students().await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            records,
            "Students retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn create_student(
    service: web::Data<StudentService>,
    record: web::Json<Option<StudentRecord>>,
) -> ActixResult<HttpResponse> {
    match service.create_student(record.into_inner()).await {
        Ok(created) => Ok(HttpResponse::Created().json(ApiResponse::success(
            created,
            "Student created successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn get_student(
    service: web::Data<StudentService>,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    match service.get_student_by_id(id.into_inner()).await {
        Ok(found) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            found,
            "Student retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn update_student(
    service: web::Data<StudentService>,
    id: web::Path<i64>,
    record: web::Json<Option<StudentRecord>>,
) -> ActixResult<HttpResponse> {
    match service
        .update_student(id.into_inner(), record.into_inner())
        .await
    {
        Ok(updated) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            updated,
            "Student updated successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

pub async fn delete_student(
    service: web::Data<StudentService>,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    match service.delete_student(id.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Student deleted successfully",
        ))),
        Err(e) => Ok(error_response(&e)),
    }
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .service(
                web::resource("")
                    .route(web::get().to(list_students))
                    .route(web::post().to(create_student)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_student))
                    .route(web::put().to(update_student))
                    .route(web::delete().to(delete_student)),
            ),
    );
}
