//! 服务注册集合实现

use injection_common::{Lifetime, ServiceCollection, ServiceRegistration};
use tracing::debug;

use crate::provider::ServiceProvider;

/// 一条已进入集合的注册
#[derive(Debug, Clone)]
pub struct RegisteredService {
    /// 生命周期
    pub lifetime: Lifetime,
    /// 注册内容
    pub registration: ServiceRegistration,
}

/// 具体的服务注册集合实现
///
/// 按加入顺序保存注册, 不去重, 不检测冲突。
#[derive(Debug, Default)]
pub struct ServiceCollectionImpl {
    entries: Vec<RegisteredService>,
}

impl ServiceCollectionImpl {
    /// 创建新的注册集合
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 已加入的注册数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 集合是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按加入顺序访问全部注册
    pub fn registrations(&self) -> &[RegisteredService] {
        &self.entries
    }

    /// 构建服务提供者, 消耗集合
    pub fn build_provider(self) -> ServiceProvider {
        ServiceProvider::new(self.entries)
    }

    fn push(&mut self, lifetime: Lifetime, registration: ServiceRegistration) {
        debug!(
            "加入注册: {} -> {} ({:?})",
            registration.service.name, registration.implementation.name, lifetime
        );
        self.entries.push(RegisteredService {
            lifetime,
            registration,
        });
    }
}

impl ServiceCollection for ServiceCollectionImpl {
    fn add_singleton(&mut self, registration: ServiceRegistration) {
        self.push(Lifetime::Singleton, registration);
    }

    fn add_scoped(&mut self, registration: ServiceRegistration) {
        self.push(Lifetime::Scoped, registration);
    }

    fn add_transient(&mut self, registration: ServiceRegistration) {
        self.push(Lifetime::Transient, registration);
    }
}
