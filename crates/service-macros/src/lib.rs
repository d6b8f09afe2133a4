//! # Service Macros
//!
//! 这个 crate 提供了按约定进行服务标记的过程宏。
//!
//! ## 核心宏
//!
//! - [`service`] - 服务标记宏
//!
//! ## 使用示例
//!
//! ```rust
//! use service_macros::service;
//!
//! pub trait Mailer: Send + Sync {
//!     fn deliver(&self, to: &str);
//! }
//!
//! #[service(singleton, provides = Mailer)]
//! #[derive(Debug, Default)]
//! pub struct SmtpMailer;
//!
//! impl Mailer for SmtpMailer {
//!     fn deliver(&self, _to: &str) {}
//! }
//! ```

use proc_macro::TokenStream;

mod service;
mod utils;

// Re-exports are not allowed in proc-macro crates

/// 服务标记宏
///
/// 这个宏会把结构体登记为按约定注册的服务：程序启动时向全局标记服务
/// 注册表提交一条服务描述符，模块扫描再据此完成注册。结构体本身保持
/// 不变，实例通过 `Default` 构造。使用方 crate 需要同时依赖
/// `injection-common` 与 `ctor`。
///
/// # 参数
///
/// - `singleton` - 单例生命周期
/// - `scoped` - 作用域生命周期（省略生命周期时的默认值）
/// - `transient` - 瞬态生命周期
/// - `provides = Trait` - 以指定 trait 对象作为服务类型注册，
///   trait 需要 `Send + Sync` 超 trait，且被标记的结构体必须实现它
///
/// # 示例
///
/// ```rust
/// use service_macros::service;
///
/// #[service(transient)]
/// #[derive(Default)]
/// pub struct ReportBuilder {
///     sections: Vec<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn service(args: TokenStream, input: TokenStream) -> TokenStream {
    service::service_impl(args.into(), input.into()).into()
}
