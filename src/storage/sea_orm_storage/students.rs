//! 学生存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use super::memberships::{
    MembershipScope, clear_memberships, course_ids_by_student, write_memberships,
};
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::students::{ActiveModel, Column, Entity as Students, Model};
use crate::errors::{Result, SchoolSystemError};
use crate::integrity::Membership;
use crate::mapper::ids_of;
use crate::models::courses::entities::Course;
use crate::models::students::entities::Student;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

/// 为学生挂载课程列表（按课程 ID 升序）
async fn attach_courses<C: ConnectionTrait>(conn: &C, models: Vec<Model>) -> Result<Vec<Student>> {
    let student_ids: Vec<i64> = models.iter().map(|m| m.id).collect();
    let mut memberships = course_ids_by_student(conn, &student_ids).await?;

    let mut course_ids: Vec<i64> = memberships.values().flatten().copied().collect();
    course_ids.sort_unstable();
    course_ids.dedup();

    let courses: HashMap<i64, Course> = if course_ids.is_empty() {
        HashMap::new()
    } else {
        Courses::find()
            .filter(CourseColumn::Id.is_in(course_ids))
            .all(conn)
            .await
            .map_err(|e| SchoolSystemError::from_db("查询学生课程失败", e))?
            .into_iter()
            .map(|m| (m.id, m.into_course()))
            .collect()
    };

    Ok(models
        .into_iter()
        .map(|m| {
            let ids = memberships.remove(&m.id).unwrap_or_default();
            let mut student = m.into_student();
            student.courses = ids
                .iter()
                .filter_map(|id| courses.get(id).cloned())
                .collect();
            student
        })
        .collect())
}

impl SeaOrmStorage {
    /// 创建学生并写入成员关系
    pub async fn create_student_impl(&self, student: Student) -> Result<Student> {
        let course_ids = ids_of(&student.courses);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::from_db("开启事务失败", e))?;

        let model = ActiveModel {
            first_name: Set(student.first_name),
            last_name: Set(student.last_name),
            email: Set(student.email),
            ..Default::default()
        };

        let inserted = model
            .insert(&txn)
            .await
            .map_err(|e| SchoolSystemError::from_db("创建学生失败", e))?;

        write_memberships(&txn, &Membership::for_student(inserted.id, &course_ids)).await?;

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::from_db("提交事务失败", e))?;

        self.get_student_by_id_impl(inserted.id).await?.ok_or_else(|| {
            SchoolSystemError::database_operation(format!(
                "Student {} missing after insert",
                inserted.id
            ))
        })
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("查询学生失败", e))?;

        match result {
            Some(model) => Ok(attach_courses(&self.db, vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    /// 批量获取学生（仅标量字段）
    pub async fn get_students_by_ids_impl(&self, ids: &[i64]) -> Result<Vec<Student>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = Students::find()
            .filter(Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("批量查询学生失败", e))?;

        Ok(models.into_iter().map(|m| m.into_student()).collect())
    }

    /// 列出全部学生
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let models = Students::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("查询学生列表失败", e))?;

        attach_courses(&self.db, models).await
    }

    /// 更新学生标量字段，课程关系保持不变
    pub async fn update_student_impl(&self, student: &Student) -> Result<Option<Student>> {
        let Some(id) = student.id else {
            return Ok(None);
        };

        let existing = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("查询学生失败", e))?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            first_name: Set(student.first_name.clone()),
            last_name: Set(student.last_name.clone()),
            email: Set(student.email.clone()),
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("更新学生失败", e))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生及其成员关系、选课记录
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::from_db("开启事务失败", e))?;

        clear_memberships(&txn, MembershipScope::Student(id)).await?;

        Enrollments::delete_many()
            .filter(EnrollmentColumn::StudentId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| SchoolSystemError::from_db("删除学生选课记录失败", e))?;

        let result = Students::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| SchoolSystemError::from_db("删除学生失败", e))?;

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::from_db("提交事务失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
