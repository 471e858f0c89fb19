//! 关联完整性层
//!
//! 在变更到达存储层之前维护跨实体引用：
//! - 引用的 ID 必须先查询到真实实体再挂载（fetch-and-attach），不存在时返回 `ReferenceNotFound`
//! - 删除教师的级联计划（见 [`cascade`]）
//! - 学生-课程成员关系统一为边集，只经由一条写入路径（见 [`membership`]）

pub mod cascade;
pub mod membership;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::errors::{Result, SchoolSystemError};
use crate::mapper::{Identified, ids_of};
use crate::models::courses::entities::Course;
use crate::models::students::entities::Student;
use crate::models::teachers::entities::Teacher;
use crate::storage::Storage;

pub use cascade::{TeacherCascade, plan_teacher_removal};
pub use membership::{Membership, MembershipEdge};

#[derive(Clone)]
pub struct RelationshipIntegrity {
    storage: Arc<dyn Storage>,
}

impl RelationshipIntegrity {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 解析课程的教师引用
    pub async fn resolve_teacher(&self, teacher_id: Option<i64>) -> Result<Teacher> {
        let teacher_id = teacher_id
            .ok_or_else(|| SchoolSystemError::reference_not_found("Teacher id is missing"))?;

        self.storage
            .get_teacher_by_id(teacher_id)
            .await?
            .ok_or_else(|| {
                SchoolSystemError::reference_not_found(format!(
                    "Teacher not found with id: {teacher_id}"
                ))
            })
    }

    /// 仅校验教师引用是否存在，`None` 视为未提供
    pub async fn verify_teacher_reference(&self, teacher_id: Option<i64>) -> Result<()> {
        if teacher_id.is_some() {
            self.resolve_teacher(teacher_id).await?;
        }
        Ok(())
    }

    pub async fn resolve_student(&self, student_id: Option<i64>) -> Result<Student> {
        let student_id = student_id
            .ok_or_else(|| SchoolSystemError::reference_not_found("Student id is missing"))?;

        let mut found = self.resolve_students(vec![Student::reference(student_id)]).await?;
        found.pop().ok_or_else(|| {
            SchoolSystemError::reference_not_found(format!(
                "Student not found with id: {student_id}"
            ))
        })
    }

    pub async fn resolve_course(&self, course_id: Option<i64>) -> Result<Course> {
        let course_id = course_id
            .ok_or_else(|| SchoolSystemError::reference_not_found("Course id is missing"))?;

        let mut found = self.resolve_courses(vec![Course::reference(course_id)]).await?;
        found.pop().ok_or_else(|| {
            SchoolSystemError::reference_not_found(format!(
                "Course not found with id: {course_id}"
            ))
        })
    }

    /// 将课程占位引用替换为查询到的实体，保持顺序并去除重复 ID
    pub async fn resolve_courses(&self, placeholders: Vec<Course>) -> Result<Vec<Course>> {
        let ids = distinct_ids(&placeholders);
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found = self.storage.get_courses_by_ids(&ids).await?;
        attach_in_order("Course", &ids, found)
    }

    /// 将学生占位引用替换为查询到的实体，保持顺序并去除重复 ID
    pub async fn resolve_students(&self, placeholders: Vec<Student>) -> Result<Vec<Student>> {
        let ids = distinct_ids(&placeholders);
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found = self.storage.get_students_by_ids(&ids).await?;
        attach_in_order("Student", &ids, found)
    }
}

fn distinct_ids<T: Identified>(placeholders: &[T]) -> Vec<i64> {
    let mut ids = ids_of(placeholders);
    let mut seen = std::collections::HashSet::new();
    ids.retain(|id| seen.insert(*id));
    ids
}

/// 按请求的 ID 顺序排列查询结果，任一 ID 缺失即报错
fn attach_in_order<T: Identified>(kind: &str, ids: &[i64], found: Vec<T>) -> Result<Vec<T>> {
    let mut by_id: HashMap<i64, T> = found
        .into_iter()
        .filter_map(|item| item.id().map(|id| (id, item)))
        .collect();

    let mut resolved = Vec::with_capacity(ids.len());
    for id in ids {
        match by_id.remove(id) {
            Some(item) => resolved.push(item),
            None => {
                debug!("{} reference {} could not be resolved", kind, id);
                return Err(SchoolSystemError::reference_not_found(format!(
                    "{kind} not found with id: {id}"
                )));
            }
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_ids_keep_first_occurrence() {
        let placeholders: Vec<Course> = crate::mapper::placeholders(&[5, 1, 5, 3, 1]);
        assert_eq!(distinct_ids(&placeholders), vec![5, 1, 3]);
    }

    #[test]
    fn test_attach_in_requested_order() {
        let found = vec![Student::reference(1), Student::reference(2)];
        let resolved = attach_in_order("Student", &[2, 1], found).unwrap();
        assert_eq!(ids_of(&resolved), vec![2, 1]);
    }

    #[test]
    fn test_missing_reference_is_reported() {
        let found = vec![Course::reference(1)];
        let err = attach_in_order("Course", &[1, 42], found).unwrap_err();
        assert_eq!(
            err,
            SchoolSystemError::reference_not_found("Course not found with id: 42")
        );
    }
}
