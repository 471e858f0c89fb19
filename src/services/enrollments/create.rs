use tracing::info;

use super::EnrollmentService;
use crate::errors::{Result, SchoolSystemError};
use crate::mapper;
use crate::models::enrollments::records::EnrollmentRecord;

pub async fn create_enrollment(
    service: &EnrollmentService,
    record: Option<EnrollmentRecord>,
) -> Result<EnrollmentRecord> {
    let record = record.ok_or_else(|| {
        SchoolSystemError::invalid_argument("Enrollment record must not be null")
    })?;
    record.validate()?;

    let mut enrollment = mapper::enrollments::to_entity(&record);
    enrollment.student = Some(service.integrity.resolve_student(record.student_id).await?);
    enrollment.course = Some(service.integrity.resolve_course(record.course_id).await?);

    let saved = service.storage.create_enrollment(enrollment).await?;
    info!(
        "Enrollment created for student {:?} in course {:?}",
        record.student_id, record.course_id
    );

    Ok(mapper::enrollments::to_record(&saved))
}
