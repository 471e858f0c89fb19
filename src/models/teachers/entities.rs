use crate::models::courses::entities::Course;

// 教师实体，`courses` 为其负责的课程（按课程 ID 排序）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Teacher {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub courses: Vec<Course>,
}
