use super::ids_of;
use crate::models::teachers::{entities::Teacher, records::TeacherRecord};

pub fn to_record(teacher: &Teacher) -> TeacherRecord {
    TeacherRecord {
        id: teacher.id,
        first_name: teacher.first_name.clone(),
        last_name: teacher.last_name.clone(),
        email: teacher.email.clone(),
        course_ids: ids_of(&teacher.courses),
    }
}

pub fn to_entity(record: &TeacherRecord) -> Teacher {
    Teacher {
        id: record.id,
        first_name: record.first_name.clone(),
        last_name: record.last_name.clone(),
        email: record.email.clone(),
        courses: Vec::new(),
    }
}

pub fn apply_scalars(teacher: &mut Teacher, record: &TeacherRecord) {
    teacher.first_name = record.first_name.clone();
    teacher.last_name = record.last_name.clone();
    teacher.email = record.email.clone();
}
