//! 教师存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use super::memberships::{MembershipScope, clear_memberships};
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::{Result, SchoolSystemError};
use crate::integrity::TeacherCascade;
use crate::models::courses::entities::Course;
use crate::models::teachers::entities::Teacher;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;

/// 按教师分组加载其课程（按课程 ID 升序）
async fn courses_by_teacher<C: ConnectionTrait>(
    conn: &C,
    teacher_ids: &[i64],
) -> Result<HashMap<i64, Vec<Course>>> {
    if teacher_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = Courses::find()
        .filter(CourseColumn::TeacherId.is_in(teacher_ids.to_vec()))
        .order_by_asc(CourseColumn::Id)
        .all(conn)
        .await
        .map_err(|e| SchoolSystemError::from_db("查询教师课程失败", e))?;

    let mut grouped: HashMap<i64, Vec<Course>> = HashMap::new();
    for row in rows {
        grouped.entry(row.teacher_id).or_default().push(row.into_course());
    }
    Ok(grouped)
}

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_teacher_impl(&self, teacher: Teacher) -> Result<Teacher> {
        let model = ActiveModel {
            first_name: Set(teacher.first_name),
            last_name: Set(teacher.last_name),
            email: Set(teacher.email),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("创建教师失败", e))?;

        // 新教师尚未负责任何课程
        Ok(result.into_teacher())
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("查询教师失败", e))?;

        let Some(model) = result else {
            return Ok(None);
        };

        let mut courses = courses_by_teacher(&self.db, &[id]).await?;
        let mut teacher = model.into_teacher();
        teacher.courses = courses.remove(&id).unwrap_or_default();
        Ok(Some(teacher))
    }

    /// 列出全部教师
    pub async fn list_teachers_impl(&self) -> Result<Vec<Teacher>> {
        let models = Teachers::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("查询教师列表失败", e))?;

        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();
        let mut courses = courses_by_teacher(&self.db, &ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let id = m.id;
                let mut teacher = m.into_teacher();
                teacher.courses = courses.remove(&id).unwrap_or_default();
                teacher
            })
            .collect())
    }

    /// 更新教师标量字段
    pub async fn update_teacher_impl(&self, teacher: &Teacher) -> Result<Option<Teacher>> {
        let Some(id) = teacher.id else {
            return Ok(None);
        };

        // 先检查教师是否存在
        let existing = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("查询教师失败", e))?;
        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            first_name: Set(teacher.first_name.clone()),
            last_name: Set(teacher.last_name.clone()),
            email: Set(teacher.email.clone()),
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("更新教师失败", e))?;

        self.get_teacher_by_id_impl(id).await
    }

    /// 按级联计划删除教师：成员关系、选课记录、课程、教师，在同一事务中完成
    pub async fn delete_teacher_impl(&self, cascade: &TeacherCascade) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::from_db("开启事务失败", e))?;

        if !cascade.course_ids.is_empty() {
            let memberships =
                clear_memberships(&txn, MembershipScope::Courses(&cascade.course_ids)).await?;

            let enrollments = Enrollments::delete_many()
                .filter(EnrollmentColumn::CourseId.is_in(cascade.course_ids.clone()))
                .exec(&txn)
                .await
                .map_err(|e| SchoolSystemError::from_db("删除课程选课记录失败", e))?;

            debug!(
                "Teacher {} cascade: {} membership row(s), {} enrollment row(s)",
                cascade.teacher_id, memberships, enrollments.rows_affected
            );
        }

        Courses::delete_many()
            .filter(CourseColumn::TeacherId.eq(cascade.teacher_id))
            .exec(&txn)
            .await
            .map_err(|e| SchoolSystemError::from_db("删除教师课程失败", e))?;

        let result = Teachers::delete_by_id(cascade.teacher_id)
            .exec(&txn)
            .await
            .map_err(|e| SchoolSystemError::from_db("删除教师失败", e))?;

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::from_db("提交事务失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
