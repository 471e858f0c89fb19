use super::TeacherService;
use crate::errors::{Result, SchoolSystemError};
use crate::mapper;
use crate::models::teachers::records::TeacherRecord;

pub async fn get_teacher_by_id(service: &TeacherService, id: i64) -> Result<TeacherRecord> {
    let teacher = service
        .storage
        .get_teacher_by_id(id)
        .await?
        .ok_or_else(|| SchoolSystemError::not_found(format!("Teacher not found with id: {id}")))?;

    Ok(mapper::teachers::to_record(&teacher))
}
