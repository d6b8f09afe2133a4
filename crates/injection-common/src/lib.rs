//! # Injection Common
//!
//! 这个 crate 提供了 InjectKit 服务注册体系的公共类型。
//!
//! ## 核心组件
//!
//! - [`Lifetime`] - 封闭的服务生命周期枚举
//! - [`ServiceDescriptor`] - 被标记服务的完整描述
//! - [`ServiceCollection`] - 容器注册入口 trait
//! - [`submit_service`] / [`marked_services`] - 进程级标记服务注册表
//!
//! ## 设计原则
//!
//! - 基于 Rust 类型系统的编译时安全
//! - 注册表只追加、不去重、不缓存
//! - 约定优于配置

pub mod collection;
pub mod errors;
pub mod lifetime;
pub mod metadata;
pub mod registry;

pub use collection::*;
pub use errors::*;
pub use lifetime::*;
pub use metadata::*;
pub use registry::*;
