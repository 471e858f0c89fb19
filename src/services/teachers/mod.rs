pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::teachers::records::TeacherRecord;
use crate::storage::Storage;

#[derive(Clone)]
pub struct TeacherService {
    storage: Arc<dyn Storage>,
}

impl TeacherService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    // 创建教师，courseIds 只读，创建时忽略
    pub async fn create_teacher(&self, record: Option<TeacherRecord>) -> Result<TeacherRecord> {
        create::create_teacher(self, record).await
    }

    pub async fn get_teacher_by_id(&self, id: i64) -> Result<TeacherRecord> {
        get::get_teacher_by_id(self, id).await
    }

    pub async fn list_all_teachers(&self) -> Result<Vec<TeacherRecord>> {
        list::list_all_teachers(self).await
    }

    pub async fn update_teacher(
        &self,
        id: i64,
        record: Option<TeacherRecord>,
    ) -> Result<TeacherRecord> {
        update::update_teacher(self, id, record).await
    }

    // 删除教师及其负责的全部课程
    pub async fn delete_teacher(&self, id: i64) -> Result<()> {
        delete::delete_teacher(self, id).await
    }
}
