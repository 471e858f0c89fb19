use super::EnrollmentService;
use crate::errors::{Result, SchoolSystemError};
use crate::mapper;
use crate::models::enrollments::records::EnrollmentRecord;

pub async fn get_enrollment_by_id(
    service: &EnrollmentService,
    id: i64,
) -> Result<EnrollmentRecord> {
    let enrollment = service
        .storage
        .get_enrollment_by_id(id)
        .await?
        .ok_or_else(|| {
            SchoolSystemError::not_found(format!("Enrollment not found with id: {id}"))
        })?;

    Ok(mapper::enrollments::to_record(&enrollment))
}
