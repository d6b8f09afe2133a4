//! 服务元数据定义
//!
//! 提供被标记服务的类型标识、描述符与类型擦除的实例工厂

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::lifetime::Lifetime;

/// 类型标识
///
/// 以 `TypeId` 为键, 同时保留编译期类型名用于日志和错误信息。
/// `T: ?Sized` 使 trait 对象 (如 `dyn Mailer`) 也可以作为服务键。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    /// 类型ID
    pub id: TypeId,
    /// 完整类型名称
    pub name: &'static str,
}

impl TypeKey {
    /// 从类型获取类型标识
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 获取简短的类型名称(不包含模块路径)
    pub fn short_name(&self) -> &'static str {
        self.name.split("::").last().unwrap_or(self.name)
    }
}

/// 类型擦除的服务实例
///
/// 约定: 内部始终包裹一个 `Arc<S>`, 其中 `S` 为注册时使用的服务类型
/// (具体结构体或 trait 对象), 解析时按同一约定向下转型。
pub type ServiceInstance = Arc<dyn Any + Send + Sync>;

/// 服务实例工厂
///
/// 每次调用产生一个新的 [`ServiceInstance`], 生命周期缓存由容器负责。
#[derive(Clone)]
pub struct ServiceFactory {
    create: Arc<dyn Fn() -> ServiceInstance + Send + Sync>,
}

impl ServiceFactory {
    /// 从构造闭包创建工厂
    pub fn from_fn<F>(create: F) -> Self
    where
        F: Fn() -> ServiceInstance + Send + Sync + 'static,
    {
        Self {
            create: Arc::new(create),
        }
    }

    /// 以 `Default` 构造具体类型 `T` 的工厂
    pub fn of<T>() -> Self
    where
        T: Default + Send + Sync + 'static,
    {
        Self::from_fn(|| {
            let service: Arc<T> = Arc::new(T::default());
            Arc::new(service)
        })
    }

    /// 创建一个新的服务实例
    pub fn instantiate(&self) -> ServiceInstance {
        (self.create)()
    }
}

impl fmt::Debug for ServiceFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<factory>")
    }
}

/// 服务描述符
///
/// 一个被标记类型在注册表中的完整记录
#[derive(Clone)]
pub struct ServiceDescriptor {
    /// 实现类型
    pub implementation: TypeKey,
    /// 显式声明的服务类型, `None` 表示以实现类型自身注册
    pub service: Option<TypeKey>,
    /// 生命周期
    pub lifetime: Lifetime,
    /// 定义所在的模块路径
    pub module_path: &'static str,
    /// 类型声明是否为 `pub`
    pub public: bool,
    /// 实例工厂
    pub factory: ServiceFactory,
}

impl ServiceDescriptor {
    /// 生效的服务键: 显式声明的服务类型, 否则为实现类型自身
    pub fn service_key(&self) -> TypeKey {
        self.service.unwrap_or(self.implementation)
    }
}

impl fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDescriptor")
            .field("implementation", &self.implementation)
            .field("service", &self.service)
            .field("lifetime", &self.lifetime)
            .field("module_path", &self.module_path)
            .field("public", &self.public)
            .field("factory", &"<factory>")
            .finish()
    }
}

/// 服务注册请求
///
/// 注册器按描述符生成, 经由 [`ServiceCollection`](crate::ServiceCollection)
/// 的某个生命周期入口进入容器
#[derive(Clone)]
pub struct ServiceRegistration {
    /// 服务键
    pub service: TypeKey,
    /// 实现类型
    pub implementation: TypeKey,
    /// 实例工厂
    pub factory: ServiceFactory,
}

impl fmt::Debug for ServiceRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistration")
            .field("service", &self.service)
            .field("implementation", &self.implementation)
            .field("factory", &"<factory>")
            .finish()
    }
}
