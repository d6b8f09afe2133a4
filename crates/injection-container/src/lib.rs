//! # 依赖注入容器实现
//!
//! 提供 [`ServiceCollection`](injection_common::ServiceCollection) 的具体实现,
//! 以及按生命周期语义解析实例的服务提供者与作用域。
//!
//! ## 核心组件
//!
//! - [`ServiceCollectionImpl`] - 保序、可重复的注册集合
//! - [`ServiceProvider`] - 不可变注册表 + 单例缓存
//! - [`ServiceScope`] - 作用域实例缓存
//!
//! ## 解析语义
//!
//! - 同一服务键多次注册时, 单个解析返回最后一次注册
//! - `resolve_all` 按注册顺序返回全部注册
//! - 每条注册独立缓存自己的单例/作用域实例

pub mod collection;
pub mod provider;
pub mod scope;

pub use collection::*;
pub use provider::*;
pub use scope::*;
