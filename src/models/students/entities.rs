use crate::models::courses::entities::Course;

// 学生实体，`courses` 与 Course::students 读取同一张关联表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Student {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub courses: Vec<Course>,
}
