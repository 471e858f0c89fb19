use super::ids_of;
use crate::models::students::{entities::Student, records::StudentRecord};

pub fn to_record(student: &Student) -> StudentRecord {
    StudentRecord {
        id: student.id,
        first_name: student.first_name.clone(),
        last_name: student.last_name.clone(),
        email: student.email.clone(),
        course_ids: ids_of(&student.courses),
    }
}

pub fn to_entity(record: &StudentRecord) -> Student {
    Student {
        id: record.id,
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        email: record.email.clone(),
        courses: Vec::new(),
    }
}

pub fn apply_scalars(student: &mut Student, record: &StudentRecord) {
    student.first_name = record.first_name.clone();
    student.last_name = record.last_name.clone();
    student.email = record.email.clone();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::Identified;
    use crate::models::courses::entities::Course;

    #[test]
    fn test_student_conversion() {
        let student = Student {
            id: Some(4),
            first_name: "Bob".to_string(),
            last_name: "Lee".to_string(),
            email: "bob@x.com".to_string(),
            courses: vec![Course::reference(2), Course::reference(1)],
        };
        let record = to_record(&student);
        assert_eq!(record.course_ids, vec![2, 1]);

        let back = to_entity(&record);
        assert_eq!(back.email, "bob@x.com");
        assert!(back.courses.is_empty());
    }
}
