//! QuizGen - 测验生成与批改平台后端服务
//!
//! 基于 Actix Web 构建的测验生成、分配与自动评分系统后端。
//!
//! # 架构
//! - `cache`: 缓存层（Moka/Redis），加速会话解析
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `generator`: 外部 AI 题目生成适配器
//! - `middlewares`: 认证授权中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（评分、打乱、报告聚合）
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod generator;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
