use super::Identified;
use crate::models::enrollments::{entities::Enrollment, records::EnrollmentRecord};

pub fn to_record(enrollment: &Enrollment) -> EnrollmentRecord {
    EnrollmentRecord {
        id: enrollment.id,
        student_id: enrollment.student.as_ref().and_then(Identified::id),
        course_id: enrollment.course.as_ref().and_then(Identified::id),
        enrollment_date: enrollment.enrollment_date,
    }
}

pub fn to_entity(record: &EnrollmentRecord) -> Enrollment {
    Enrollment {
        id: record.id,
        student: None,
        course: None,
        enrollment_date: record.enrollment_date,
    }
}
