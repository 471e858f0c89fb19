use tracing::info;

use super::CourseService;
use crate::errors::{Result, SchoolSystemError};

pub async fn delete_course(service: &CourseService, id: i64) -> Result<()> {
    if !service.storage.delete_course(id).await? {
        return Err(SchoolSystemError::not_found(format!(
            "Course not found with id: {id}"
        )));
    }

    info!("Course {} deleted", id);
    Ok(())
}
