pub mod courses;
pub mod enrollments;
pub mod students;
pub mod teachers;

use std::sync::Arc;

use crate::storage::Storage;

pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use students::StudentService;
pub use teachers::TeacherService;

/// 全部实体服务，共享同一个存储实例
#[derive(Clone)]
pub struct AppServices {
    pub courses: CourseService,
    pub students: StudentService,
    pub teachers: TeacherService,
    pub enrollments: EnrollmentService,
}

impl AppServices {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            courses: CourseService::new(storage.clone()),
            students: StudentService::new(storage.clone()),
            teachers: TeacherService::new(storage.clone()),
            enrollments: EnrollmentService::new(storage),
        }
    }
}
