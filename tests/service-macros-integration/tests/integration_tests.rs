//! service-macros 集中集成测试
//!
//! 标记展开在本测试进程启动时执行, 这里校验提交到标记服务注册表的
//! 描述符内容。

use std::sync::Arc;

use injection_common::{marked_services, Lifetime, ServiceDescriptor, TypeKey};

mod fixtures {
    use service_macros::service;

    pub trait Inventory: Send + Sync {
        fn on_hand(&self, sku: &str) -> u32;
    }

    /// 无参数标记, 生命周期取默认值
    #[service]
    #[derive(Debug, Default)]
    pub struct ReportService {
        pub rows: Vec<String>,
    }

    /// 显式服务类型的单例
    #[service(singleton, provides = Inventory)]
    #[derive(Debug, Default)]
    pub struct StockKeeper;

    impl Inventory for StockKeeper {
        fn on_hand(&self, _sku: &str) -> u32 {
            7
        }
    }

    /// 非公开类型, 描述符照常提交, 由扫描阶段过滤
    #[service(transient)]
    #[derive(Debug, Default)]
    pub(crate) struct CachePrimer;
}

fn fixture_descriptors() -> Vec<ServiceDescriptor> {
    marked_services()
        .into_iter()
        .filter(|descriptor| descriptor.module_path == "integration_tests::fixtures")
        .collect()
}

fn descriptor_of(implementation: TypeKey) -> ServiceDescriptor {
    fixture_descriptors()
        .into_iter()
        .find(|descriptor| descriptor.implementation == implementation)
        .expect("缺少标记服务描述符")
}

#[test]
fn test_every_marked_struct_submits_one_descriptor() {
    assert_eq!(fixture_descriptors().len(), 3);
}

#[test]
fn test_bare_marker_defaults_to_scoped_self_registration() {
    let report = descriptor_of(TypeKey::of::<fixtures::ReportService>());

    assert_eq!(report.lifetime, Lifetime::Scoped);
    assert!(report.service.is_none());
    assert_eq!(
        report.service_key(),
        TypeKey::of::<fixtures::ReportService>()
    );
    assert!(report.public);
}

#[test]
fn test_provides_marker_uses_trait_object_service_key() {
    let keeper = descriptor_of(TypeKey::of::<fixtures::StockKeeper>());

    assert_eq!(keeper.lifetime, Lifetime::Singleton);
    assert_eq!(keeper.service_key(), TypeKey::of::<dyn fixtures::Inventory>());
    assert_eq!(
        keeper.implementation,
        TypeKey::of::<fixtures::StockKeeper>()
    );
    assert!(keeper.public);
}

#[test]
fn test_non_public_struct_is_flagged_as_private() {
    let primer = descriptor_of(TypeKey::of::<fixtures::CachePrimer>());

    assert_eq!(primer.lifetime, Lifetime::Transient);
    assert!(!primer.public);
}

#[test]
fn test_factories_wrap_instances_by_service_type() {
    let report = descriptor_of(TypeKey::of::<fixtures::ReportService>());
    let instance = report.factory.instantiate();
    let report_service = match instance.downcast::<Arc<fixtures::ReportService>>() {
        Ok(arc) => (*arc).clone(),
        Err(_) => panic!("实例应包裹 Arc<ReportService>"),
    };
    assert!(report_service.rows.is_empty());

    let keeper = descriptor_of(TypeKey::of::<fixtures::StockKeeper>());
    let instance = keeper.factory.instantiate();
    let inventory = match instance.downcast::<Arc<dyn fixtures::Inventory>>() {
        Ok(arc) => (*arc).clone(),
        Err(_) => panic!("实例应包裹 Arc<dyn Inventory>"),
    };
    assert_eq!(inventory.on_hand("sku-1"), 7);
}

#[test]
fn test_factory_calls_produce_fresh_instances() {
    let report = descriptor_of(TypeKey::of::<fixtures::ReportService>());

    let first = report.factory.instantiate();
    let second = report.factory.instantiate();
    assert!(!Arc::ptr_eq(&first, &second));
}
