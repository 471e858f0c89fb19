use tracing::info;

use super::TeacherService;
use crate::errors::{Result, SchoolSystemError};
use crate::mapper;
use crate::models::teachers::records::TeacherRecord;

pub async fn update_teacher(
    service: &TeacherService,
    id: i64,
    record: Option<TeacherRecord>,
) -> Result<TeacherRecord> {
    let record = record
        .ok_or_else(|| SchoolSystemError::invalid_argument("Teacher record must not be null"))?;
    record.validate()?;

    let mut teacher = service
        .storage
        .get_teacher_by_id(id)
        .await?
        .ok_or_else(|| SchoolSystemError::not_found(format!("Teacher not found with id: {id}")))?;

    mapper::teachers::apply_scalars(&mut teacher, &record);

    let updated = service
        .storage
        .update_teacher(&teacher)
        .await?
        .ok_or_else(|| SchoolSystemError::not_found(format!("Teacher not found with id: {id}")))?;

    info!("Teacher {} updated", id);
    Ok(mapper::teachers::to_record(&updated))
}
