use super::TeacherService;
use crate::errors::Result;
use crate::mapper;
use crate::models::teachers::records::TeacherRecord;

pub async fn list_all_teachers(service: &TeacherService) -> Result<Vec<TeacherRecord>> {
    let teachers = service.storage.list_teachers().await?;
    Ok(teachers.iter().map(mapper::teachers::to_record).collect())
}
