use super::CourseService;
use crate::errors::Result;
use crate::mapper;
use crate::models::courses::records::CourseRecord;

pub async fn list_all_courses(service: &CourseService) -> Result<Vec<CourseRecord>> {
    let courses = service.storage.list_courses().await?;
    Ok(courses.iter().map(mapper::courses::to_record).collect())
}
