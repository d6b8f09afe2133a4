//! 服务注册集合抽象

use crate::metadata::ServiceRegistration;

/// 服务注册集合 trait
///
/// 容器构建器的注册入口, 三个方法分别对应三种生命周期。
/// 注册不会失败也不返回值, 重复注册的语义由具体容器决定。
pub trait ServiceCollection {
    /// 注册单例服务
    fn add_singleton(&mut self, registration: ServiceRegistration);

    /// 注册作用域服务
    fn add_scoped(&mut self, registration: ServiceRegistration);

    /// 注册瞬时服务
    fn add_transient(&mut self, registration: ServiceRegistration);
}
