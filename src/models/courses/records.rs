use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{Result, SchoolSystemError};
use crate::utils::validate::{is_blank, validate_length};

pub const COURSE_NAME_MIN: usize = 2;
pub const COURSE_NAME_MAX: usize = 50;
pub const COURSE_DESCRIPTION_MAX: usize = 200;

// 课程记录（请求与响应共用）
//
// 关联字段只携带 ID：`teacherId` 为必填引用，`studentIds` 顺序与存储层返回一致。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "course.ts")]
pub struct CourseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub teacher_id: Option<i64>,
    #[serde(default)]
    pub student_ids: Vec<i64>,
}

impl CourseRecord {
    /// 创建时的完整校验：标量字段 + 必填的教师引用
    pub fn validate(&self) -> Result<()> {
        self.validate_scalars()?;
        if self.teacher_id.is_none() {
            return Err(SchoolSystemError::validation("Teacher id is mandatory"));
        }
        Ok(())
    }

    /// 更新路径只校验会被写入的标量字段
    pub fn validate_scalars(&self) -> Result<()> {
        if is_blank(&self.name) {
            return Err(SchoolSystemError::validation("Course name is mandatory"));
        }
        if !validate_length(&self.name, COURSE_NAME_MIN, COURSE_NAME_MAX) {
            return Err(SchoolSystemError::validation(format!(
                "Course name must be between {COURSE_NAME_MIN} and {COURSE_NAME_MAX} characters"
            )));
        }
        if let Some(description) = &self.description
            && description.chars().count() > COURSE_DESCRIPTION_MAX
        {
            return Err(SchoolSystemError::validation(format!(
                "Description must not exceed {COURSE_DESCRIPTION_MAX} characters"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CourseRecord {
        CourseRecord {
            name: "Algorithms".to_string(),
            teacher_id: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_course_record() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn test_name_rules() {
        let mut r = record();
        r.name = "  ".to_string();
        assert_eq!(
            r.validate().unwrap_err(),
            SchoolSystemError::validation("Course name is mandatory")
        );

        r.name = "A".to_string();
        assert!(r.validate().is_err());

        r.name = "a".repeat(51);
        assert!(r.validate().is_err());

        r.name = "a".repeat(50);
        assert!(r.validate().is_ok());
    }

    #[test]
    fn test_description_limit() {
        let mut r = record();
        r.description = Some("d".repeat(200));
        assert!(r.validate().is_ok());
        r.description = Some("d".repeat(201));
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_teacher_required_only_on_full_validation() {
        let mut r = record();
        r.teacher_id = None;
        assert!(r.validate().is_err());
        assert!(r.validate_scalars().is_ok());
    }

    #[test]
    fn test_camel_case_wire_format() {
        let r: CourseRecord =
            serde_json::from_str(r#"{"name":"Algorithms","teacherId":1,"studentIds":[3,2]}"#)
                .unwrap();
        assert_eq!(r.teacher_id, Some(1));
        assert_eq!(r.student_ids, vec![3, 2]);
        assert_eq!(r.id, None);

        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["teacherId"], 1);
    }
}
