use tracing::info;

use super::StudentService;
use crate::errors::{Result, SchoolSystemError};
use crate::mapper::{self, placeholders};
use crate::models::students::records::StudentRecord;

pub async fn create_student(
    service: &StudentService,
    record: Option<StudentRecord>,
) -> Result<StudentRecord> {
    let record = record
        .ok_or_else(|| SchoolSystemError::invalid_argument("Student record must not be null"))?;
    record.validate()?;

    let mut student = mapper::students::to_entity(&record);
    student.courses = service
        .integrity
        .resolve_courses(placeholders(&record.course_ids))
        .await?;

    let saved = service.storage.create_student(student).await?;
    info!(
        "Student {} {} created with {} course(s)",
        saved.first_name,
        saved.last_name,
        saved.courses.len()
    );

    Ok(mapper::students::to_record(&saved))
}
