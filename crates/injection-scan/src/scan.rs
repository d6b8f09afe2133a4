//! 标记服务的扫描注册实现

use injection_common::{
    marked_services, Lifetime, ServiceCollection, ServiceDescriptor, ServiceRegistration,
};
use tracing::{debug, info};

/// 注册集合的扫描注册扩展
///
/// 所有方法返回同一个集合的可变引用以支持链式调用。
/// 扫描是纯追加操作: 不去重, 不检测冲突, 不缓存扫描结果,
/// 重复扫描同一模块会把其中的服务再注册一遍。
pub trait ServiceScanExt: ServiceCollection {
    /// 按给定顺序注册多个模块中的标记服务
    ///
    /// 等价于对每个模块依次调用
    /// [`add_services_from_module`](Self::add_services_from_module),
    /// 注册结果为各模块的并集, 模块间顺序保持不变。
    fn add_services_from_modules(&mut self, modules: &[&str]) -> &mut Self {
        for module in modules {
            self.add_services_from_module(module);
        }
        self
    }

    /// 注册单个模块中的标记服务
    ///
    /// 枚举注册表, 保留模块路径落在 `module` 内且声明为 `pub` 的描述符,
    /// 逐条转交给容器。模块内的相对顺序跟随注册表提交顺序, 不作保证。
    /// 未命中任何描述符时静默返回。
    fn add_services_from_module(&mut self, module: &str) -> &mut Self {
        debug!("开始扫描模块: {}", module);

        let mut count = 0usize;
        for descriptor in marked_services() {
            if !module_matches(descriptor.module_path, module) {
                continue;
            }
            if !descriptor.public {
                debug!("跳过非公开服务: {}", descriptor.implementation.name);
                continue;
            }
            register_descriptor(self, &descriptor);
            count += 1;
        }

        info!("扫描模块 {} 完成，注册 {} 个服务", module, count);
        self
    }

    /// 注册一组预先给定的描述符
    ///
    /// 不做模块过滤, 但同样只保留声明为 `pub` 的描述符。
    fn add_services_from_descriptors<'a, I>(&mut self, descriptors: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a ServiceDescriptor>,
    {
        for descriptor in descriptors {
            if !descriptor.public {
                debug!("跳过非公开服务: {}", descriptor.implementation.name);
                continue;
            }
            register_descriptor(self, descriptor);
        }
        self
    }
}

impl<C: ServiceCollection + ?Sized> ServiceScanExt for C {}

/// 描述符的模块路径是否落在扫描目标内
///
/// 目标匹配整个模块或其子模块, 按路径段对齐:
/// `app::mail` 匹配 `app::mail` 和 `app::mail::smtp`, 不匹配 `app::mailer`。
fn module_matches(module_path: &str, target: &str) -> bool {
    if module_path == target {
        return true;
    }
    module_path
        .strip_prefix(target)
        .map_or(false, |rest| rest.starts_with("::"))
}

/// 把单个描述符转交给注册集合
///
/// 服务键取显式声明的服务类型, 没有则退回实现类型自身。
/// 生命周期分发对封闭枚举穷尽匹配, 不设通配分支。
fn register_descriptor<C>(collection: &mut C, descriptor: &ServiceDescriptor)
where
    C: ServiceCollection + ?Sized,
{
    let registration = ServiceRegistration {
        service: descriptor.service_key(),
        implementation: descriptor.implementation,
        factory: descriptor.factory.clone(),
    };

    debug!(
        "注册服务: {} -> {} ({:?})",
        registration.service.name, registration.implementation.name, descriptor.lifetime
    );

    match descriptor.lifetime {
        Lifetime::Singleton => collection.add_singleton(registration),
        Lifetime::Scoped => collection.add_scoped(registration),
        Lifetime::Transient => collection.add_transient(registration),
    }
}
