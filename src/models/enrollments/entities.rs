use crate::models::courses::entities::Course;
use crate::models::students::entities::Student;

// 选课记录实体：某一时刻的选课事件，不与学生/课程的成员关系同步
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Enrollment {
    pub id: Option<i64>,
    pub student: Option<Student>,
    pub course: Option<Course>,
    pub enrollment_date: Option<chrono::NaiveDate>,
}
