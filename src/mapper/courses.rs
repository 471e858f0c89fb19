use super::{Identified, ids_of};
use crate::models::courses::{entities::Course, records::CourseRecord};

pub fn to_record(course: &Course) -> CourseRecord {
    CourseRecord {
        id: course.id,
        name: course.name.clone(),
        description: course.description.clone(),
        teacher_id: course.teacher.as_ref().and_then(Identified::id),
        student_ids: ids_of(&course.students),
    }
}

pub fn to_entity(record: &CourseRecord) -> Course {
    Course {
        id: record.id,
        name: record.name.clone(),
        description: record.description.clone(),
        teacher: None,
        students: Vec::new(),
    }
}

pub fn apply_scalars(course: &mut Course, record: &CourseRecord) {
    course.name = record.name.clone();
    course.description = record.description.clone();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::students::entities::Student;
    use crate::models::teachers::entities::Teacher;

    fn stored_course() -> Course {
        Course {
            id: Some(1),
            name: "Algorithms".to_string(),
            description: Some("Sorting and searching".to_string()),
            teacher: Some(Teacher {
                id: Some(7),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@x.com".to_string(),
                courses: Vec::new(),
            }),
            students: vec![Student::reference(12), Student::reference(3)],
        }
    }

    #[test]
    fn test_to_record_projects_relations_to_ids() {
        let record = to_record(&stored_course());
        assert_eq!(record.id, Some(1));
        assert_eq!(record.teacher_id, Some(7));
        // 保持集合原有顺序，不排序
        assert_eq!(record.student_ids, vec![12, 3]);
    }

    #[test]
    fn test_to_entity_leaves_relations_empty() {
        let record = CourseRecord {
            id: None,
            name: "Algorithms".to_string(),
            description: None,
            teacher_id: Some(7),
            student_ids: vec![1, 2],
        };
        let course = to_entity(&record);
        assert_eq!(course.name, "Algorithms");
        assert!(course.teacher.is_none());
        assert!(course.students.is_empty());
    }

    #[test]
    fn test_apply_scalars_keeps_relations() {
        let mut course = stored_course();
        let record = CourseRecord {
            name: "Data Structures".to_string(),
            description: None,
            teacher_id: Some(99),
            student_ids: vec![],
            ..Default::default()
        };
        apply_scalars(&mut course, &record);
        assert_eq!(course.name, "Data Structures");
        assert_eq!(course.description, None);
        assert_eq!(course.teacher.as_ref().and_then(|t| t.id), Some(7));
        assert_eq!(course.students.len(), 2);
    }
}
