use super::EnrollmentService;
use crate::errors::Result;
use crate::mapper;
use crate::models::enrollments::records::EnrollmentRecord;

pub async fn list_all_enrollments(service: &EnrollmentService) -> Result<Vec<EnrollmentRecord>> {
    let enrollments = service.storage.list_enrollments().await?;
    Ok(enrollments.iter().map(mapper::enrollments::to_record).collect())
}
