pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::integrity::RelationshipIntegrity;
use crate::models::courses::records::CourseRecord;
use crate::storage::Storage;

#[derive(Clone)]
pub struct CourseService {
    storage: Arc<dyn Storage>,
    integrity: RelationshipIntegrity,
}

impl CourseService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            integrity: RelationshipIntegrity::new(storage.clone()),
            storage,
        }
    }

    // 创建课程，教师与学生引用必须存在
    pub async fn create_course(&self, record: Option<CourseRecord>) -> Result<CourseRecord> {
        create::create_course(self, record).await
    }

    pub async fn get_course_by_id(&self, id: i64) -> Result<CourseRecord> {
        get::get_course_by_id(self, id).await
    }

    pub async fn list_all_courses(&self) -> Result<Vec<CourseRecord>> {
        list::list_all_courses(self).await
    }

    // 更新课程名称与描述
    pub async fn update_course(
        &self,
        id: i64,
        record: Option<CourseRecord>,
    ) -> Result<CourseRecord> {
        update::update_course(self, id, record).await
    }

    // 删除课程及其成员关系、选课记录
    pub async fn delete_course(&self, id: i64) -> Result<()> {
        delete::delete_course(self, id).await
    }
}
