//! School System - 学校管理后端服务
//!
//! 基于 Actix Web 与 SeaORM 构建的学生、教师、课程与选课记录管理服务。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `integrity`: 关联完整性层（引用解析、删除级联、成员关系）
//! - `mapper`: 记录与实体之间的转换
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod integrity;
pub mod mapper;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
