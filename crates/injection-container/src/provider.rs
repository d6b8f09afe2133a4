//! 服务提供者实现

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use injection_common::{Lifetime, ResolutionError, ResolutionResult, ServiceInstance};
use tracing::info;

use crate::collection::RegisteredService;
use crate::scope::ServiceScope;

/// 提供者内部共享的注册表
///
/// 构建后不再变化, 单例缓存以注册下标为键,
/// 同一服务键的重复注册各自持有独立实例。
pub(crate) struct ProviderInner {
    entries: Vec<RegisteredService>,
    by_service: HashMap<TypeId, Vec<usize>>,
    singletons: DashMap<usize, ServiceInstance>,
}

impl ProviderInner {
    /// 指定服务键的全部注册下标, 按注册顺序
    pub(crate) fn indices_of(&self, service_id: TypeId) -> Option<&[usize]> {
        self.by_service.get(&service_id).map(Vec::as_slice)
    }

    /// 指定服务键生效的注册下标(最后一次注册)
    pub(crate) fn last_index_of(&self, service_id: TypeId) -> Option<usize> {
        self.by_service
            .get(&service_id)
            .and_then(|indices| indices.last().copied())
    }

    /// 按生命周期语义取得下标对应的实例
    ///
    /// 单例缓存在提供者, 作用域实例缓存在调用方传入的缓存,
    /// 瞬时实例每次新建。
    pub(crate) fn instance_for(
        &self,
        index: usize,
        scoped: &DashMap<usize, ServiceInstance>,
    ) -> ServiceInstance {
        let entry = &self.entries[index];
        match entry.lifetime {
            Lifetime::Singleton => self
                .singletons
                .entry(index)
                .or_insert_with(|| entry.registration.factory.instantiate())
                .value()
                .clone(),
            Lifetime::Scoped => scoped
                .entry(index)
                .or_insert_with(|| entry.registration.factory.instantiate())
                .value()
                .clone(),
            Lifetime::Transient => entry.registration.factory.instantiate(),
        }
    }

    pub(crate) fn registration_count(&self) -> usize {
        self.entries.len()
    }
}

/// 将类型擦除的实例还原为 `Arc<S>`
pub(crate) fn unwrap_instance<S>(
    instance: ServiceInstance,
    type_name: &str,
) -> ResolutionResult<Arc<S>>
where
    S: ?Sized + Send + Sync + 'static,
{
    instance
        .downcast::<Arc<S>>()
        .map(|arc| (*arc).clone())
        .map_err(|_| ResolutionError::type_mismatch(type_name))
}

/// 服务提供者
///
/// 由注册集合构建, 注册表从此不可变。作用域服务在根作用域解析。
pub struct ServiceProvider {
    inner: Arc<ProviderInner>,
    root: ServiceScope,
}

impl ServiceProvider {
    /// 从注册列表构建提供者
    pub(crate) fn new(entries: Vec<RegisteredService>) -> Self {
        let mut by_service: HashMap<TypeId, Vec<usize>> = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            by_service
                .entry(entry.registration.service.id)
                .or_default()
                .push(index);
        }

        info!("构建服务提供者完成，共 {} 条注册", entries.len());

        let inner = Arc::new(ProviderInner {
            entries,
            by_service,
            singletons: DashMap::new(),
        });
        let root = ServiceScope::new(Arc::clone(&inner));
        Self { inner, root }
    }

    /// 创建新的服务作用域
    pub fn create_scope(&self) -> ServiceScope {
        ServiceScope::new(Arc::clone(&self.inner))
    }

    /// 解析服务
    ///
    /// 同一服务键存在多条注册时返回最后一次注册的实例。
    pub fn resolve<S>(&self) -> ResolutionResult<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.root.resolve::<S>()
    }

    /// 尝试解析服务, 失败时返回 `None`
    pub fn try_resolve<S>(&self) -> Option<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.root.try_resolve::<S>()
    }

    /// 按注册顺序解析指定服务键的全部注册
    pub fn resolve_all<S>(&self) -> ResolutionResult<Vec<Arc<S>>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.root.resolve_all::<S>()
    }

    /// 服务键是否存在注册
    pub fn is_registered<S>(&self) -> bool
    where
        S: ?Sized + 'static,
    {
        self.root.is_registered::<S>()
    }

    /// 注册总数
    pub fn registration_count(&self) -> usize {
        self.inner.registration_count()
    }
}
