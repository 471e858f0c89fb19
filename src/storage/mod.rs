use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::errors::Result;
use crate::integrity::{MembershipEdge, TeacherCascade};
use crate::models::{
    courses::entities::Course, enrollments::entities::Enrollment, students::entities::Student,
    teachers::entities::Teacher,
};

pub mod sea_orm_storage;

/// 实体存储接口
///
/// 创建方法接收已解析关联的实体：课程必须挂载教师，学生/课程的成员列表
/// 会写入 `student_courses`。更新方法只写标量字段。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 教师管理方法
    // 创建教师
    async fn create_teacher(&self, teacher: Teacher) -> Result<Teacher>;
    // 通过ID获取教师（含其课程）
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    // 列出全部教师
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;
    // 更新教师标量字段
    async fn update_teacher(&self, teacher: &Teacher) -> Result<Option<Teacher>>;
    // 按级联计划删除教师及其课程
    async fn delete_teacher(&self, cascade: &TeacherCascade) -> Result<bool>;

    /// 课程管理方法
    // 创建课程（同时写入成员关系）
    async fn create_course(&self, course: Course) -> Result<Course>;
    // 通过ID获取课程（含教师与学生）
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 批量获取课程（仅标量字段，不保证顺序）
    async fn get_courses_by_ids(&self, ids: &[i64]) -> Result<Vec<Course>>;
    // 列出全部课程
    async fn list_courses(&self) -> Result<Vec<Course>>;
    // 更新课程标量字段
    async fn update_course(&self, course: &Course) -> Result<Option<Course>>;
    // 删除课程及其成员关系、选课记录
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 学生管理方法
    // 创建学生（同时写入成员关系）
    async fn create_student(&self, student: Student) -> Result<Student>;
    // 通过ID获取学生（含课程）
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 批量获取学生（仅标量字段，不保证顺序）
    async fn get_students_by_ids(&self, ids: &[i64]) -> Result<Vec<Student>>;
    // 列出全部学生
    async fn list_students(&self) -> Result<Vec<Student>>;
    // 更新学生标量字段
    async fn update_student(&self, student: &Student) -> Result<Option<Student>>;
    // 删除学生及其成员关系、选课记录
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 成员关系
    // 列出全部学生-课程关系边
    async fn list_memberships(&self) -> Result<Vec<MembershipEdge>>;

    /// 选课记录管理方法
    async fn create_enrollment(&self, enrollment: Enrollment) -> Result<Enrollment>;
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    async fn list_enrollments(&self) -> Result<Vec<Enrollment>>;
    async fn delete_enrollment(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}
