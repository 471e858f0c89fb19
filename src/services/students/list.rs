use super::StudentService;
use crate::errors::Result;
use crate::mapper;
use crate::models::students::records::StudentRecord;

pub async fn list_all_students(service: &StudentService) -> Result<Vec<StudentRecord>> {
    let students = service.storage.list_students().await?;
    Ok(students.iter().map(mapper::students::to_record).collect())
}
