use tracing::info;

use super::CourseService;
use crate::errors::{Result, SchoolSystemError};
use crate::mapper;
use crate::models::courses::records::CourseRecord;

pub async fn update_course(
    service: &CourseService,
    id: i64,
    record: Option<CourseRecord>,
) -> Result<CourseRecord> {
    let record = record
        .ok_or_else(|| SchoolSystemError::invalid_argument("Course record must not be null"))?;
    record.validate_scalars()?;

    let mut course = service
        .storage
        .get_course_by_id(id)
        .await?
        .ok_or_else(|| SchoolSystemError::not_found(format!("Course not found with id: {id}")))?;

    // 教师引用只做存在性校验，不会改变课程归属
    service
        .integrity
        .verify_teacher_reference(record.teacher_id)
        .await?;

    mapper::courses::apply_scalars(&mut course, &record);

    let updated = service
        .storage
        .update_course(&course)
        .await?
        .ok_or_else(|| SchoolSystemError::not_found(format!("Course not found with id: {id}")))?;

    info!("Course {} updated", id);
    Ok(mapper::courses::to_record(&updated))
}
