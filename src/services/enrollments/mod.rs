pub mod create;
pub mod delete;
pub mod get;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::integrity::RelationshipIntegrity;
use crate::models::enrollments::records::EnrollmentRecord;
use crate::storage::Storage;

/// 选课记录服务，记录只增删，不提供更新
#[derive(Clone)]
pub struct EnrollmentService {
    storage: Arc<dyn Storage>,
    integrity: RelationshipIntegrity,
}

impl EnrollmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            integrity: RelationshipIntegrity::new(storage.clone()),
            storage,
        }
    }

    pub async fn create_enrollment(
        &self,
        record: Option<EnrollmentRecord>,
    ) -> Result<EnrollmentRecord> {
        create::create_enrollment(self, record).await
    }

    pub async fn get_enrollment_by_id(&self, id: i64) -> Result<EnrollmentRecord> {
        get::get_enrollment_by_id(self, id).await
    }

    pub async fn list_all_enrollments(&self) -> Result<Vec<EnrollmentRecord>> {
        list::list_all_enrollments(self).await
    }

    pub async fn delete_enrollment(&self, id: i64) -> Result<()> {
        delete::delete_enrollment(self, id).await
    }
}
