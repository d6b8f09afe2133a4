//! 标记服务注册表
//!
//! 进程级注册表, 由 `#[service]` 宏生成的构造函数在 `main` 之前提交描述符。
//! 提交顺序跟随链接顺序, 跨 crate 的相对顺序不作任何保证。

use crate::metadata::ServiceDescriptor;

/// 全局标记服务注册表
static MARKED_SERVICES: once_cell::sync::Lazy<parking_lot::RwLock<Vec<ServiceDescriptor>>> =
    once_cell::sync::Lazy::new(|| parking_lot::RwLock::new(Vec::new()));

/// 提交一个服务描述符
///
/// 注册表只追加, 不去重, 运行期间不会被清空。
pub fn submit_service(descriptor: ServiceDescriptor) {
    tracing::trace!(
        "提交服务描述符: {} ({:?})",
        descriptor.implementation.name,
        descriptor.lifetime
    );
    MARKED_SERVICES.write().push(descriptor);
}

/// 获取所有已提交描述符的快照, 按提交顺序排列
pub fn marked_services() -> Vec<ServiceDescriptor> {
    MARKED_SERVICES.read().clone()
}
