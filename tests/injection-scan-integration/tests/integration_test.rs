//! 模块扫描到容器解析的端到端集成测试
//!
//! 标记服务在进程启动时提交描述符, 各测试用独立的服务集合扫描,
//! 彼此互不影响。

use std::sync::Arc;

use injection_common::TypeKey;
use injection_container::ServiceCollectionImpl;
use injection_scan::ServiceScanExt;

mod fixtures {
    use service_macros::service;

    pub trait Mailer: Send + Sync {
        fn transport(&self) -> &'static str;
    }

    /// 默认生命周期的订单服务
    #[service]
    #[derive(Debug, Default)]
    pub struct OrderService;

    /// 以 trait 对象注册的单例邮件服务
    #[service(singleton, provides = Mailer)]
    #[derive(Debug, Default)]
    pub struct SmtpMailer;

    impl Mailer for SmtpMailer {
        fn transport(&self) -> &'static str {
            "smtp"
        }
    }

    /// 未标记的类型, 扫描不应注册
    #[derive(Debug, Default)]
    pub struct Utility;
}

mod pricing {
    use service_macros::service;

    /// 每次解析新实例的报价引擎
    #[service(transient)]
    #[derive(Debug, Default)]
    pub struct PricingEngine;
}

#[test]
fn test_scan_registers_only_marked_types() {
    let mut collection = ServiceCollectionImpl::new();
    collection.add_services_from_module("integration_test::fixtures");
    assert_eq!(collection.len(), 2);

    let provider = collection.build_provider();
    assert_eq!(provider.registration_count(), 2);
    assert!(provider.is_registered::<fixtures::OrderService>());
    assert!(provider.is_registered::<dyn fixtures::Mailer>());
    assert!(!provider.is_registered::<fixtures::SmtpMailer>());
    assert!(!provider.is_registered::<fixtures::Utility>());
}

#[test]
fn test_module_filter_respects_segment_boundaries() {
    let mut collection = ServiceCollectionImpl::new();
    collection.add_services_from_module("integration_test::fix");
    assert!(collection.is_empty());
}

#[test]
fn test_scanning_parent_module_includes_nested_services() {
    let mut collection = ServiceCollectionImpl::new();
    collection.add_services_from_module("integration_test");
    assert_eq!(collection.len(), 3);
}

#[test]
fn test_modules_register_in_given_order() {
    let mut collection = ServiceCollectionImpl::new();
    collection.add_services_from_modules(&[
        "integration_test::pricing",
        "integration_test::fixtures",
    ]);

    let entries = collection.registrations();
    assert_eq!(entries.len(), 3);
    assert_eq!(
        entries[0].registration.service,
        TypeKey::of::<pricing::PricingEngine>()
    );

    let tail: Vec<TypeKey> = entries[1..]
        .iter()
        .map(|entry| entry.registration.service)
        .collect();
    assert!(tail.contains(&TypeKey::of::<fixtures::OrderService>()));
    assert!(tail.contains(&TypeKey::of::<dyn fixtures::Mailer>()));
}

#[test]
fn test_scoped_service_is_cached_per_scope() {
    let mut collection = ServiceCollectionImpl::new();
    collection.add_services_from_module("integration_test::fixtures");
    let provider = collection.build_provider();

    let scope_a = provider.create_scope();
    let scope_b = provider.create_scope();

    let first: Arc<fixtures::OrderService> = scope_a.resolve().unwrap();
    let again: Arc<fixtures::OrderService> = scope_a.resolve().unwrap();
    let other: Arc<fixtures::OrderService> = scope_b.resolve().unwrap();

    assert!(Arc::ptr_eq(&first, &again));
    assert!(!Arc::ptr_eq(&first, &other));
}

#[test]
fn test_trait_keyed_singleton_is_shared_across_scopes() {
    let mut collection = ServiceCollectionImpl::new();
    collection.add_services_from_module("integration_test::fixtures");
    let provider = collection.build_provider();

    let scope_a = provider.create_scope();
    let scope_b = provider.create_scope();

    let mailer_a: Arc<dyn fixtures::Mailer> = scope_a.resolve().unwrap();
    let mailer_b: Arc<dyn fixtures::Mailer> = scope_b.resolve().unwrap();

    assert_eq!(mailer_a.transport(), "smtp");
    assert!(Arc::ptr_eq(&mailer_a, &mailer_b));
}

#[test]
fn test_transient_service_is_fresh_per_resolution() {
    let mut collection = ServiceCollectionImpl::new();
    collection.add_services_from_module("integration_test::pricing");
    let provider = collection.build_provider();

    let first: Arc<pricing::PricingEngine> = provider.resolve().unwrap();
    let second: Arc<pricing::PricingEngine> = provider.resolve().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_rescan_appends_duplicate_registrations() {
    let mut collection = ServiceCollectionImpl::new();
    collection
        .add_services_from_module("integration_test::fixtures")
        .add_services_from_module("integration_test::fixtures");
    assert_eq!(collection.len(), 4);

    let provider = collection.build_provider();
    assert_eq!(provider.registration_count(), 4);

    let all: Vec<Arc<fixtures::OrderService>> = provider.resolve_all().unwrap();
    assert_eq!(all.len(), 2);
    assert!(!Arc::ptr_eq(&all[0], &all[1]));

    let resolved: Arc<fixtures::OrderService> = provider.resolve().unwrap();
    assert!(Arc::ptr_eq(&resolved, &all[1]));
}
