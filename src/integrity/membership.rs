//! 学生-课程成员关系
//!
//! 多对多关系只存在一份：`student_courses` 中的 (student_id, course_id) 边。
//! 无论从学生侧还是课程侧发起，都先归一化为同一组边，再由存储层唯一的写入路径落库。

use std::collections::BTreeSet;

use crate::mapper::ids_of;
use crate::models::courses::entities::Course;
use crate::models::students::entities::Student;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MembershipEdge {
    pub student_id: i64,
    pub course_id: i64,
}

/// 一组去重后的成员关系边，保持首次出现的顺序
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Membership {
    edges: Vec<MembershipEdge>,
}

impl Membership {
    /// 学生侧：一个学生选修多门课程
    pub fn for_student(student_id: i64, course_ids: &[i64]) -> Self {
        Self::from_edges(course_ids.iter().map(|&course_id| MembershipEdge {
            student_id,
            course_id,
        }))
    }

    /// 课程侧：一门课程包含多个学生
    pub fn for_course(course_id: i64, student_ids: &[i64]) -> Self {
        Self::from_edges(student_ids.iter().map(|&student_id| MembershipEdge {
            student_id,
            course_id,
        }))
    }

    /// 从已加载学生的课程列表投影出边集
    pub fn of_students(students: &[Student]) -> Self {
        Self::from_edges(students.iter().flat_map(|student| {
            let student_id = student.id;
            ids_of(&student.courses)
                .into_iter()
                .filter_map(move |course_id| {
                    student_id.map(|student_id| MembershipEdge {
                        student_id,
                        course_id,
                    })
                })
        }))
    }

    /// 从已加载课程的学生列表投影出边集
    pub fn of_courses(courses: &[Course]) -> Self {
        Self::from_edges(courses.iter().flat_map(|course| {
            let course_id = course.id;
            ids_of(&course.students)
                .into_iter()
                .filter_map(move |student_id| {
                    course_id.map(|course_id| MembershipEdge {
                        student_id,
                        course_id,
                    })
                })
        }))
    }

    pub fn from_edges(edges: impl IntoIterator<Item = MembershipEdge>) -> Self {
        let mut seen = BTreeSet::new();
        let edges = edges.into_iter().filter(|edge| seen.insert(*edge)).collect();
        Self { edges }
    }

    pub fn edges(&self) -> &[MembershipEdge] {
        &self.edges
    }

    /// 两组边（忽略顺序）是否完全一致，用于校验双向视图的对称性
    pub fn is_mirror_of(&self, other: &Membership) -> bool {
        let left: BTreeSet<_> = self.edges.iter().collect();
        let right: BTreeSet<_> = other.edges.iter().collect();
        left == right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::Identified;

    #[test]
    fn test_both_sides_produce_same_edges() {
        let from_student = Membership::for_student(1, &[10]);
        let from_course = Membership::for_course(10, &[1]);
        assert_eq!(from_student.edges(), from_course.edges());
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let membership = Membership::for_student(1, &[3, 2, 3, 2]);
        assert_eq!(
            membership.edges(),
            &[
                MembershipEdge {
                    student_id: 1,
                    course_id: 3
                },
                MembershipEdge {
                    student_id: 1,
                    course_id: 2
                },
            ]
        );
    }

    #[test]
    fn test_projection_symmetry() {
        let mut alice = Student::reference(1);
        alice.courses = vec![Course::reference(10), Course::reference(11)];
        let mut bob = Student::reference(2);
        bob.courses = vec![Course::reference(10)];

        let mut algorithms = Course::reference(10);
        algorithms.students = vec![Student::reference(2), Student::reference(1)];
        let mut databases = Course::reference(11);
        databases.students = vec![Student::reference(1)];

        let student_view = Membership::of_students(&[alice, bob]);
        let course_view = Membership::of_courses(&[algorithms, databases.clone()]);
        assert!(student_view.is_mirror_of(&course_view));

        // 课程侧缺少一条边时不对称
        let partial = Membership::of_courses(&[databases]);
        assert!(!student_view.is_mirror_of(&partial));
    }
}
