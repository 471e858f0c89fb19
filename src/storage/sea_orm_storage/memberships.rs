//! 学生-课程成员关系存储操作
//!
//! `student_courses` 的唯一写入路径：学生侧与课程侧的写入都经过这里。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::student_courses::{ActiveModel, Column, Entity as StudentCourses};
use crate::errors::{Result, SchoolSystemError};
use crate::integrity::{Membership, MembershipEdge};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

/// 需要清除成员关系的范围
pub(super) enum MembershipScope<'a> {
    Student(i64),
    Courses(&'a [i64]),
}

/// 写入一组成员关系边
pub(super) async fn write_memberships<C: ConnectionTrait>(
    conn: &C,
    membership: &Membership,
) -> Result<()> {
    for edge in membership.edges() {
        let model = ActiveModel {
            course_id: Set(edge.course_id),
            student_id: Set(edge.student_id),
        };
        model
            .insert(conn)
            .await
            .map_err(|e| SchoolSystemError::from_db("写入选课关系失败", e))?;
    }
    Ok(())
}

/// 清除指定范围内的成员关系
pub(super) async fn clear_memberships<C: ConnectionTrait>(
    conn: &C,
    scope: MembershipScope<'_>,
) -> Result<u64> {
    let delete = match scope {
        MembershipScope::Student(student_id) => {
            StudentCourses::delete_many().filter(Column::StudentId.eq(student_id))
        }
        MembershipScope::Courses(course_ids) => {
            if course_ids.is_empty() {
                return Ok(0);
            }
            StudentCourses::delete_many().filter(Column::CourseId.is_in(course_ids.to_vec()))
        }
    };

    let result = delete
        .exec(conn)
        .await
        .map_err(|e| SchoolSystemError::from_db("删除选课关系失败", e))?;

    Ok(result.rows_affected)
}

/// 按课程分组的学生 ID（按学生 ID 升序）
pub(super) async fn student_ids_by_course<C: ConnectionTrait>(
    conn: &C,
    course_ids: &[i64],
) -> Result<HashMap<i64, Vec<i64>>> {
    if course_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = StudentCourses::find()
        .filter(Column::CourseId.is_in(course_ids.to_vec()))
        .order_by_asc(Column::StudentId)
        .all(conn)
        .await
        .map_err(|e| SchoolSystemError::from_db("查询课程学生失败", e))?;

    let mut grouped: HashMap<i64, Vec<i64>> = HashMap::new();
    for row in rows {
        grouped.entry(row.course_id).or_default().push(row.student_id);
    }
    Ok(grouped)
}

/// 按学生分组的课程 ID（按课程 ID 升序）
pub(super) async fn course_ids_by_student<C: ConnectionTrait>(
    conn: &C,
    student_ids: &[i64],
) -> Result<HashMap<i64, Vec<i64>>> {
    if student_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = StudentCourses::find()
        .filter(Column::StudentId.is_in(student_ids.to_vec()))
        .order_by_asc(Column::CourseId)
        .all(conn)
        .await
        .map_err(|e| SchoolSystemError::from_db("查询学生课程失败", e))?;

    let mut grouped: HashMap<i64, Vec<i64>> = HashMap::new();
    for row in rows {
        grouped.entry(row.student_id).or_default().push(row.course_id);
    }
    Ok(grouped)
}

impl SeaOrmStorage {
    /// 列出全部成员关系边
    pub async fn list_memberships_impl(&self) -> Result<Vec<MembershipEdge>> {
        let rows = StudentCourses::find()
            .order_by_asc(Column::StudentId)
            .order_by_asc(Column::CourseId)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("查询选课关系失败", e))?;

        Ok(rows.into_iter().map(|m| m.into_edge()).collect())
    }
}
