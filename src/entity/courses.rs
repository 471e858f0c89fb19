//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub teacher_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "super::student_courses::Entity")]
    StudentCourses,
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::student_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentCourses.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

// 通过 student_courses 关联到学生（多对多）
impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_courses::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_courses::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
//
// 教师只以占位引用的形式挂载（仅 ID），学生列表为空，由存储层按需加载。
impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        use crate::mapper::Identified;
        use crate::models::courses::entities::Course;
        use crate::models::teachers::entities::Teacher;

        Course {
            id: Some(self.id),
            name: self.name,
            description: self.description,
            teacher: Some(Teacher::reference(self.teacher_id)),
            students: Vec::new(),
        }
    }
}
