pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::integrity::RelationshipIntegrity;
use crate::models::students::records::StudentRecord;
use crate::storage::Storage;

#[derive(Clone)]
pub struct StudentService {
    storage: Arc<dyn Storage>,
    integrity: RelationshipIntegrity,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            integrity: RelationshipIntegrity::new(storage.clone()),
            storage,
        }
    }

    // 创建学生，选修课程引用必须存在
    pub async fn create_student(&self, record: Option<StudentRecord>) -> Result<StudentRecord> {
        create::create_student(self, record).await
    }

    pub async fn get_student_by_id(&self, id: i64) -> Result<StudentRecord> {
        get::get_student_by_id(self, id).await
    }

    pub async fn list_all_students(&self) -> Result<Vec<StudentRecord>> {
        list::list_all_students(self).await
    }

    pub async fn update_student(
        &self,
        id: i64,
        record: Option<StudentRecord>,
    ) -> Result<StudentRecord> {
        update::update_student(self, id, record).await
    }

    pub async fn delete_student(&self, id: i64) -> Result<()> {
        delete::delete_student(self, id).await
    }
}
