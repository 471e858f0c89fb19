use super::StudentService;
use crate::errors::{Result, SchoolSystemError};
use crate::mapper;
use crate::models::students::records::StudentRecord;

pub async fn get_student_by_id(service: &StudentService, id: i64) -> Result<StudentRecord> {
    let student = service
        .storage
        .get_student_by_id(id)
        .await?
        .ok_or_else(|| SchoolSystemError::not_found(format!("Student not found with id: {id}")))?;

    Ok(mapper::students::to_record(&student))
}
