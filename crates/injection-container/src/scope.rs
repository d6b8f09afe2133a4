//! 服务作用域实现

use std::any::TypeId;
use std::sync::Arc;

use dashmap::DashMap;
use injection_common::{ResolutionError, ResolutionResult, ServiceInstance};
use tracing::debug;

use crate::provider::{unwrap_instance, ProviderInner};

/// 服务作用域
///
/// 持有本作用域内已创建的作用域实例, 随作用域一起释放。
/// 单例仍由提供者持有, 瞬时实例不缓存。
pub struct ServiceScope {
    id: uuid::Uuid,
    created_at: chrono::DateTime<chrono::Utc>,
    inner: Arc<ProviderInner>,
    scoped: DashMap<usize, ServiceInstance>,
}

impl ServiceScope {
    /// 创建新作用域
    pub(crate) fn new(inner: Arc<ProviderInner>) -> Self {
        let id = uuid::Uuid::new_v4();
        debug!("创建服务作用域: {}", id);
        Self {
            id,
            created_at: chrono::Utc::now(),
            inner,
            scoped: DashMap::new(),
        }
    }

    /// 作用域标识
    pub fn id(&self) -> uuid::Uuid {
        self.id
    }

    /// 作用域创建时间
    pub fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.created_at
    }

    /// 解析服务
    ///
    /// 同一服务键存在多条注册时返回最后一次注册的实例。
    pub fn resolve<S>(&self) -> ResolutionResult<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        let type_name = std::any::type_name::<S>();
        let index = self
            .inner
            .last_index_of(TypeId::of::<S>())
            .ok_or_else(|| ResolutionError::not_registered(type_name))?;
        let instance = self.inner.instance_for(index, &self.scoped);
        unwrap_instance(instance, type_name)
    }

    /// 尝试解析服务, 失败时返回 `None`
    pub fn try_resolve<S>(&self) -> Option<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.resolve::<S>().ok()
    }

    /// 按注册顺序解析指定服务键的全部注册
    pub fn resolve_all<S>(&self) -> ResolutionResult<Vec<Arc<S>>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        let type_name = std::any::type_name::<S>();
        let indices = match self.inner.indices_of(TypeId::of::<S>()) {
            Some(indices) => indices,
            None => return Ok(Vec::new()),
        };

        let mut services = Vec::with_capacity(indices.len());
        for &index in indices {
            let instance = self.inner.instance_for(index, &self.scoped);
            services.push(unwrap_instance(instance, type_name)?);
        }
        Ok(services)
    }

    /// 服务键是否存在注册
    pub fn is_registered<S>(&self) -> bool
    where
        S: ?Sized + 'static,
    {
        self.inner.last_index_of(TypeId::of::<S>()).is_some()
    }
}
