//! AcadSys - 学业档案与成绩分析平台后端服务
//!
//! 基于 Actix Web 构建的班级考勤与测验成绩管理系统后端，
//! 核心是把原始考勤记录和测验成绩换算成百分比、缺勤名单和
//! 需进步名单的聚合层。
//!
//! # 架构
//! - `aggregation`: 考勤与成绩聚合核心（纯函数）
//! - `cache`: 缓存层（Moka/Redis）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证授权中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod aggregation;
pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
