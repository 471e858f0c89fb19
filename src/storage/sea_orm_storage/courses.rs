//! 课程存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use super::memberships::{
    MembershipScope, clear_memberships, student_ids_by_course, write_memberships,
};
use crate::entity::courses::{ActiveModel, Column, Entity as Courses, Model};
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{Result, SchoolSystemError};
use crate::integrity::Membership;
use crate::mapper::{Identified, ids_of};
use crate::models::courses::entities::Course;
use crate::models::students::entities::Student;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

/// 为课程挂载学生列表（按学生 ID 升序）
async fn attach_students<C: ConnectionTrait>(conn: &C, models: Vec<Model>) -> Result<Vec<Course>> {
    let course_ids: Vec<i64> = models.iter().map(|m| m.id).collect();
    let mut memberships = student_ids_by_course(conn, &course_ids).await?;

    let mut student_ids: Vec<i64> = memberships.values().flatten().copied().collect();
    student_ids.sort_unstable();
    student_ids.dedup();

    let students: HashMap<i64, Student> = if student_ids.is_empty() {
        HashMap::new()
    } else {
        Students::find()
            .filter(StudentColumn::Id.is_in(student_ids))
            .all(conn)
            .await
            .map_err(|e| SchoolSystemError::from_db("查询课程学生失败", e))?
            .into_iter()
            .map(|m| (m.id, m.into_student()))
            .collect()
    };

    Ok(models
        .into_iter()
        .map(|m| {
            let ids = memberships.remove(&m.id).unwrap_or_default();
            let mut course = m.into_course();
            course.students = ids
                .iter()
                .filter_map(|id| students.get(id).cloned())
                .collect();
            course
        })
        .collect())
}

impl SeaOrmStorage {
    /// 创建课程并写入成员关系
    pub async fn create_course_impl(&self, course: Course) -> Result<Course> {
        let teacher_id = course
            .teacher
            .as_ref()
            .and_then(Identified::id)
            .ok_or_else(|| SchoolSystemError::invalid_argument("Course teacher is not resolved"))?;
        let student_ids = ids_of(&course.students);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::from_db("开启事务失败", e))?;

        let model = ActiveModel {
            name: Set(course.name),
            description: Set(course.description),
            teacher_id: Set(teacher_id),
            ..Default::default()
        };

        let inserted = model
            .insert(&txn)
            .await
            .map_err(|e| SchoolSystemError::from_db("创建课程失败", e))?;

        write_memberships(&txn, &Membership::for_course(inserted.id, &student_ids)).await?;

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::from_db("提交事务失败", e))?;

        // 重新加载，关联顺序与查询接口一致
        self.get_course_by_id_impl(inserted.id).await?.ok_or_else(|| {
            SchoolSystemError::database_operation(format!(
                "Course {} missing after insert",
                inserted.id
            ))
        })
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("查询课程失败", e))?;

        match result {
            Some(model) => Ok(attach_students(&self.db, vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    /// 批量获取课程（仅标量字段与教师引用）
    pub async fn get_courses_by_ids_impl(&self, ids: &[i64]) -> Result<Vec<Course>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = Courses::find()
            .filter(Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("批量查询课程失败", e))?;

        Ok(models.into_iter().map(|m| m.into_course()).collect())
    }

    /// 列出全部课程
    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let models = Courses::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("查询课程列表失败", e))?;

        attach_students(&self.db, models).await
    }

    /// 更新课程标量字段，教师与学生关系保持不变
    pub async fn update_course_impl(&self, course: &Course) -> Result<Option<Course>> {
        let Some(id) = course.id else {
            return Ok(None);
        };

        let existing = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("查询课程失败", e))?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.name = Set(course.name.clone());
        model.description = Set(course.description.clone());

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("更新课程失败", e))?;

        self.get_course_by_id_impl(id).await
    }

    /// 删除课程及其成员关系、选课记录
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::from_db("开启事务失败", e))?;

        clear_memberships(&txn, MembershipScope::Courses(&[id])).await?;

        Enrollments::delete_many()
            .filter(EnrollmentColumn::CourseId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| SchoolSystemError::from_db("删除课程选课记录失败", e))?;

        let result = Courses::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| SchoolSystemError::from_db("删除课程失败", e))?;

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::from_db("提交事务失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
