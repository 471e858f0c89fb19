use super::CourseService;
use crate::errors::{Result, SchoolSystemError};
use crate::mapper;
use crate::models::courses::records::CourseRecord;

pub async fn get_course_by_id(service: &CourseService, id: i64) -> Result<CourseRecord> {
    let course = service
        .storage
        .get_course_by_id(id)
        .await?
        .ok_or_else(|| SchoolSystemError::not_found(format!("Course not found with id: {id}")))?;

    Ok(mapper::courses::to_record(&course))
}
