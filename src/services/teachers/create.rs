use tracing::info;

use super::TeacherService;
use crate::errors::{Result, SchoolSystemError};
use crate::mapper;
use crate::models::teachers::records::TeacherRecord;

pub async fn create_teacher(
    service: &TeacherService,
    record: Option<TeacherRecord>,
) -> Result<TeacherRecord> {
    let record = record
        .ok_or_else(|| SchoolSystemError::invalid_argument("Teacher record must not be null"))?;
    record.validate()?;

    let teacher = mapper::teachers::to_entity(&record);
    let saved = service.storage.create_teacher(teacher).await?;
    info!("Teacher {} {} created", saved.first_name, saved.last_name);

    Ok(mapper::teachers::to_record(&saved))
}
