use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{Result, SchoolSystemError};
use crate::utils::validate::{is_blank, validate_person_name};

// 教师记录（请求与响应共用）
//
// `courseIds` 只读：课程归属只能通过课程的 teacherId 设置，创建/更新时忽略该字段。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "teacher.ts")]
pub struct TeacherRecord {
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

impl TeacherRecord {
    // 教师邮箱只做非空校验，不校验格式
    pub fn validate(&self) -> Result<()> {
        validate_person_name(&self.first_name, "First name").map_err(SchoolSystemError::validation)?;
        validate_person_name(&self.last_name, "Last name").map_err(SchoolSystemError::validation)?;
        if is_blank(&self.email) {
            return Err(SchoolSystemError::validation("Email is mandatory"));
        }
        Ok(())
    }
}
