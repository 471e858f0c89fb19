use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{Result, SchoolSystemError};

// 选课记录（请求与响应共用），`enrollmentDate` 缺省时取创建当天（UTC）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "enrollment.ts")]
pub struct EnrollmentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub course_id: Option<i64>,
    #[serde(default)]
    pub enrollment_date: Option<chrono::NaiveDate>,
}

impl EnrollmentRecord {
    pub fn validate(&self) -> Result<()> {
        if self.student_id.is_none() {
            return Err(SchoolSystemError::validation("Student id is mandatory"));
        }
        if self.course_id.is_none() {
            return Err(SchoolSystemError::validation("Course id is mandatory"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_wire_format() {
        let r: EnrollmentRecord =
            serde_json::from_str(r#"{"studentId":1,"courseId":2,"enrollmentDate":"2024-09-01"}"#)
                .unwrap();
        assert_eq!(
            r.enrollment_date,
            chrono::NaiveDate::from_ymd_opt(2024, 9, 1)
        );
        assert!(r.validate().is_ok());
    }

    #[test]
    fn test_references_required() {
        let r = EnrollmentRecord {
            student_id: Some(1),
            ..Default::default()
        };
        assert_eq!(
            r.validate().unwrap_err(),
            SchoolSystemError::validation("Course id is mandatory")
        );
    }
}
