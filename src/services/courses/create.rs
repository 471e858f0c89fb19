use tracing::info;

use super::CourseService;
use crate::errors::{Result, SchoolSystemError};
use crate::mapper::{self, placeholders};
use crate::models::courses::records::CourseRecord;

pub async fn create_course(
    service: &CourseService,
    record: Option<CourseRecord>,
) -> Result<CourseRecord> {
    let record = record
        .ok_or_else(|| SchoolSystemError::invalid_argument("Course record must not be null"))?;
    record.validate()?;

    let mut course = mapper::courses::to_entity(&record);

    // 占位引用在持久化前全部替换为真实实体
    course.teacher = Some(service.integrity.resolve_teacher(record.teacher_id).await?);
    course.students = service
        .integrity
        .resolve_students(placeholders(&record.student_ids))
        .await?;

    let saved = service.storage.create_course(course).await?;
    info!(
        "Course {} created with {} student(s)",
        saved.name,
        saved.students.len()
    );

    Ok(mapper::courses::to_record(&saved))
}
