//! 删除级联规则
//!
//! 删除教师时一并删除其负责的课程；课程被删除时，其成员关系与选课记录随之删除。
//! 级联计划在这里显式计算，由存储层在同一事务中执行。

use crate::errors::{Result, SchoolSystemError};
use crate::mapper::ids_of;
use crate::models::teachers::entities::Teacher;

/// 删除教师的级联计划
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherCascade {
    pub teacher_id: i64,
    /// 随教师一并删除的课程
    pub course_ids: Vec<i64>,
}

/// 根据已加载课程列表的教师计算级联计划
pub fn plan_teacher_removal(teacher: &Teacher) -> Result<TeacherCascade> {
    let teacher_id = teacher.id.ok_or_else(|| {
        SchoolSystemError::invalid_argument("Cannot plan removal of an unsaved teacher")
    })?;

    Ok(TeacherCascade {
        teacher_id,
        course_ids: ids_of(&teacher.courses),
    })
}
