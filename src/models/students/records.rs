use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{Result, SchoolSystemError};
use crate::utils::validate::{is_blank, validate_email, validate_person_name};

// 学生记录（请求与响应共用）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "student.ts")]
pub struct StudentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub course_ids: Vec<i64>,
}

impl StudentRecord {
    pub fn validate(&self) -> Result<()> {
        validate_person_name(&self.first_name, "First name").map_err(SchoolSystemError::validation)?;
        validate_person_name(&self.last_name, "Last name").map_err(SchoolSystemError::validation)?;
        if is_blank(&self.email) {
            return Err(SchoolSystemError::validation("Email is mandatory"));
        }
        validate_email(&self.email).map_err(SchoolSystemError::validation)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> StudentRecord {
        StudentRecord {
            first_name: "Bob".to_string(),
            last_name: "Lee".to_string(),
            email: "bob@x.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_student_record() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn test_email_format_is_checked() {
        let mut r = record();
        r.email = "bob-at-x".to_string();
        assert_eq!(
            r.validate().unwrap_err(),
            SchoolSystemError::validation("Email should be valid")
        );
        r.email = String::new();
        assert_eq!(
            r.validate().unwrap_err(),
            SchoolSystemError::validation("Email is mandatory")
        );
    }

    #[test]
    fn test_last_name_length() {
        let mut r = record();
        r.last_name = "L".to_string();
        assert_eq!(
            r.validate().unwrap_err().message(),
            "Last name must be between 2 and 30 characters"
        );
    }
}
