//! 记录（DTO）与实体之间的转换
//!
//! 所有转换均为手写的逐字段映射：
//! - `to_record`：复制标量字段，关联对象投影为 ID 列表
//! - `to_entity`：只复制标量字段，关联字段留空，由关联完整性层查询后挂载
//! - `apply_scalars`：更新路径，只覆盖标量字段

pub mod courses;
pub mod enrollments;
pub mod students;
pub mod teachers;

use crate::models::courses::entities::Course;
use crate::models::enrollments::entities::Enrollment;
use crate::models::students::entities::Student;
use crate::models::teachers::entities::Teacher;

/// 具有存储层分配 ID 的实体
pub trait Identified: Sized {
    fn id(&self) -> Option<i64>;

    /// 仅含 ID 的占位引用，其余字段为空
    fn reference(id: i64) -> Self;
}

/// 按输入顺序提取 ID，跳过尚未持久化的实体
pub fn ids_of<T: Identified>(items: &[T]) -> Vec<i64> {
    items.iter().filter_map(Identified::id).collect()
}

/// 由 ID 列表构造占位引用，顺序与输入一致
///
/// 占位引用不能直接持久化，需经 `RelationshipIntegrity` 解析为真实实体。
pub fn placeholders<T: Identified>(ids: &[i64]) -> Vec<T> {
    ids.iter().copied().map(T::reference).collect()
}

macro_rules! impl_identified {
    ($($entity:ty),* $(,)?) => {
        $(
            impl Identified for $entity {
                fn id(&self) -> Option<i64> {
                    self.id
                }

                fn reference(id: i64) -> Self {
                    Self {
                        id: Some(id),
                        ..Default::default()
                    }
                }
            }
        )*
    };
}

impl_identified!(Course, Student, Teacher, Enrollment);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_preserve_input_order() {
        let students = vec![
            Student::reference(9),
            Student::default(),
            Student::reference(2),
            Student::reference(5),
        ];
        assert_eq!(ids_of(&students), vec![9, 2, 5]);
    }

    #[test]
    fn test_placeholders_carry_only_the_id() {
        let courses: Vec<Course> = placeholders(&[4, 1]);
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].id, Some(4));
        assert_eq!(courses[1].id, Some(1));
        assert!(courses[0].name.is_empty());
        assert!(courses[0].teacher.is_none());
        assert!(courses[0].students.is_empty());
    }

    #[test]
    fn test_placeholders_round_trip_through_ids() {
        let ids = vec![3, 1, 2];
        let teachers: Vec<Teacher> = placeholders(&ids);
        assert_eq!(ids_of(&teachers), ids);
    }
}
