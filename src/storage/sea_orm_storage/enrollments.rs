//! 选课记录存储操作

use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{Result, SchoolSystemError};
use crate::mapper::Identified;
use crate::models::enrollments::entities::Enrollment;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建选课记录，学生与课程必须已解析
    pub async fn create_enrollment_impl(&self, enrollment: Enrollment) -> Result<Enrollment> {
        let student_id = enrollment
            .student
            .as_ref()
            .and_then(Identified::id)
            .ok_or_else(|| {
                SchoolSystemError::invalid_argument("Enrollment student is not resolved")
            })?;
        let course_id = enrollment
            .course
            .as_ref()
            .and_then(Identified::id)
            .ok_or_else(|| {
                SchoolSystemError::invalid_argument("Enrollment course is not resolved")
            })?;
        // 未提供日期时使用当天（UTC）
        let enrollment_date = enrollment
            .enrollment_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive());

        let model = ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            enrollment_date: Set(enrollment_date),
            ..Default::default()
        };

        let inserted = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("创建选课记录失败", e))?;

        let mut created = inserted.into_enrollment();
        created.student = enrollment.student;
        created.course = enrollment.course;
        Ok(created)
    }

    pub async fn get_enrollment_by_id_impl(&self, id: i64) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("查询选课记录失败", e))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    pub async fn list_enrollments_impl(&self) -> Result<Vec<Enrollment>> {
        let models = Enrollments::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("查询选课记录列表失败", e))?;

        Ok(models.into_iter().map(|m| m.into_enrollment()).collect())
    }

    pub async fn delete_enrollment_impl(&self, id: i64) -> Result<bool> {
        let result = Enrollments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("删除选课记录失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
