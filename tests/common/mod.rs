#![allow(dead_code)]

use std::sync::Arc;

use rust_school_system::config::DatabaseConfig;
use rust_school_system::models::courses::records::CourseRecord;
use rust_school_system::models::students::records::StudentRecord;
use rust_school_system::models::teachers::records::TeacherRecord;
use rust_school_system::services::AppServices;
use rust_school_system::storage::{Storage, create_storage};

/// 每个测试独立的内存数据库（单连接，迁移已执行）
pub async fn setup() -> (Arc<dyn Storage>, AppServices) {
    let config = DatabaseConfig {
        url: ":memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    let storage = create_storage(&config).await.unwrap();
    let services = AppServices::new(storage.clone());
    (storage, services)
}

pub fn teacher(first_name: &str, last_name: &str, email: &str) -> TeacherRecord {
    TeacherRecord {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        ..Default::default()
    }
}

pub fn student(first_name: &str, last_name: &str, email: &str, course_ids: &[i64]) -> StudentRecord {
    StudentRecord {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        course_ids: course_ids.to_vec(),
        ..Default::default()
    }
}

pub fn course(name: &str, teacher_id: i64) -> CourseRecord {
    CourseRecord {
        name: name.to_string(),
        teacher_id: Some(teacher_id),
        ..Default::default()
    }
}
