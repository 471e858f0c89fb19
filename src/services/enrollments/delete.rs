use tracing::info;

use super::EnrollmentService;
use crate::errors::{Result, SchoolSystemError};

pub async fn delete_enrollment(service: &EnrollmentService, id: i64) -> Result<()> {
    if !service.storage.delete_enrollment(id).await? {
        return Err(SchoolSystemError::not_found(format!(
            "Enrollment not found with id: {id}"
        )));
    }

    info!("Enrollment {} deleted", id);
    Ok(())
}
