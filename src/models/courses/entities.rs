use crate::models::students::entities::Student;
use crate::models::teachers::entities::Teacher;

// 课程实体
//
// `teacher` 与 `students` 是已解析的关联对象；从记录转换而来时两者为空，
// 需由关联完整性层查询后挂载。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Course {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub teacher: Option<Teacher>,
    pub students: Vec<Student>,
}
