use tracing::info;

use super::StudentService;
use crate::errors::{Result, SchoolSystemError};
use crate::mapper;
use crate::models::students::records::StudentRecord;

pub async fn update_student(
    service: &StudentService,
    id: i64,
    record: Option<StudentRecord>,
) -> Result<StudentRecord> {
    let record = record
        .ok_or_else(|| SchoolSystemError::invalid_argument("Student record must not be null"))?;
    record.validate()?;

    let mut student = service
        .storage
        .get_student_by_id(id)
        .await?
        .ok_or_else(|| SchoolSystemError::not_found(format!("Student not found with id: {id}")))?;

    // courseIds 不参与更新
    mapper::students::apply_scalars(&mut student, &record);

    let updated = service
        .storage
        .update_student(&student)
        .await?
        .ok_or_else(|| SchoolSystemError::not_found(format!("Student not found with id: {id}")))?;

    info!("Student {} updated", id);
    Ok(mapper::students::to_record(&updated))
}
