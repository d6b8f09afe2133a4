//! # 标记服务扫描与注册
//!
//! 把 `#[service]` 标记提交到注册表的服务描述符按模块来源
//! 批量转交给任意 [`ServiceCollection`](injection_common::ServiceCollection)。
//!
//! ## 核心组件
//!
//! - [`ServiceScanExt`] - 注册集合的扫描注册扩展 trait
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! use injection_container::ServiceCollectionImpl;
//! use injection_scan::ServiceScanExt;
//! use service_macros::service;
//!
//! #[service(singleton)]
//! #[derive(Default)]
//! pub struct AuditLog;
//!
//! let mut services = ServiceCollectionImpl::new();
//! services.add_services_from_modules(&[module_path!()]);
//!
//! let provider = services.build_provider();
//! let audit = provider.resolve::<AuditLog>().unwrap();
//! # let _ = audit;
//! ```

pub mod scan;

pub use scan::*;
