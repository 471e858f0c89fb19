use tracing::info;

use super::StudentService;
use crate::errors::{Result, SchoolSystemError};

pub async fn delete_student(service: &StudentService, id: i64) -> Result<()> {
    if !service.storage.delete_student(id).await? {
        return Err(SchoolSystemError::not_found(format!(
            "Student not found with id: {id}"
        )));
    }

    info!("Student {} deleted", id);
    Ok(())
}
