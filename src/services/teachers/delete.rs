use tracing::info;

use super::TeacherService;
use crate::errors::{Result, SchoolSystemError};
use crate::integrity::plan_teacher_removal;

pub async fn delete_teacher(service: &TeacherService, id: i64) -> Result<()> {
    let teacher = service
        .storage
        .get_teacher_by_id(id)
        .await?
        .ok_or_else(|| SchoolSystemError::not_found(format!("Teacher not found with id: {id}")))?;

    let cascade = plan_teacher_removal(&teacher)?;
    if !service.storage.delete_teacher(&cascade).await? {
        return Err(SchoolSystemError::not_found(format!(
            "Teacher not found with id: {id}"
        )));
    }

    info!(
        "Teacher {} deleted together with {} course(s)",
        id,
        cascade.course_ids.len()
    );
    Ok(())
}
