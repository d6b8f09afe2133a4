//! # 注册演示应用
//!
//! 演示如何用标记宏加模块扫描完成按约定的服务注册与解析

use std::sync::Arc;

use chrono::{DateTime, Utc};
use injection_container::{ServiceCollectionImpl, ServiceProvider};
use injection_scan::ServiceScanExt;
use serde::{Deserialize, Serialize};
use tracing::info;

fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("启动服务注册演示");

    // 扫描标记服务, 模块按给定顺序注册
    let mut collection = ServiceCollectionImpl::new();
    collection.add_services_from_modules(&[
        "registration_demo::ordering",
        "registration_demo::notify",
    ]);

    let provider = collection.build_provider();
    info!("扫描完成，共 {} 条注册", provider.registration_count());

    // 演示生命周期语义
    demonstrate_lifetimes(&provider)?;

    // 演示按 trait 解析
    demonstrate_trait_resolution(&provider)?;

    // 演示收据打印
    demonstrate_receipts(&provider)?;

    info!("演示结束");
    Ok(())
}

/// 演示三种生命周期的实例行为
fn demonstrate_lifetimes(provider: &ServiceProvider) -> anyhow::Result<()> {
    info!("演示生命周期语义");

    let scope_a = provider.create_scope();
    let scope_b = provider.create_scope();

    let repo_a: Arc<ordering::OrderRepository> = scope_a.resolve()?;
    let repo_again: Arc<ordering::OrderRepository> = scope_a.resolve()?;
    let repo_b: Arc<ordering::OrderRepository> = scope_b.resolve()?;

    info!("作用域内同一仓储实例: {}", Arc::ptr_eq(&repo_a, &repo_again));
    info!("跨作用域隔离: {}", !Arc::ptr_eq(&repo_a, &repo_b));
    info!(
        "作用域 A 连续取号: {}, {}",
        repo_a.next_order_id(),
        repo_again.next_order_id()
    );
    info!("作用域 B 从头取号: {}", repo_b.next_order_id());

    let printer_once: Arc<ordering::ReceiptPrinter> = provider.resolve()?;
    let printer_twice: Arc<ordering::ReceiptPrinter> = provider.resolve()?;
    info!(
        "瞬态打印器每次都是新实例: {}",
        !Arc::ptr_eq(&printer_once, &printer_twice)
    );

    Ok(())
}

/// 演示以 trait 对象为服务键的解析
fn demonstrate_trait_resolution(provider: &ServiceProvider) -> anyhow::Result<()> {
    info!("演示按 trait 解析");

    let scope_a = provider.create_scope();
    let scope_b = provider.create_scope();

    let mailer_a: Arc<dyn notify::Mailer> = scope_a.resolve()?;
    let mailer_b: Arc<dyn notify::Mailer> = scope_b.resolve()?;
    info!("单例跨作用域共享: {}", Arc::ptr_eq(&mailer_a, &mailer_b));

    mailer_a.deliver("ops@example.com", "订单 1001 已创建");
    Ok(())
}

/// 演示瞬态服务处理业务实体
fn demonstrate_receipts(provider: &ServiceProvider) -> anyhow::Result<()> {
    info!("演示收据打印");

    let scope = provider.create_scope();
    let repository: Arc<ordering::OrderRepository> = scope.resolve()?;
    let printer: Arc<ordering::ReceiptPrinter> = scope.resolve()?;

    let receipt = Receipt {
        order_id: repository.next_order_id(),
        total_cents: 4200,
        issued_at: Utc::now(),
    };
    info!("收据 JSON:\n{}", printer.render(&receipt)?);

    Ok(())
}

// 示例服务

mod ordering {
    use std::sync::atomic::{AtomicU32, Ordering};

    use service_macros::service;

    use crate::Receipt;

    /// 订单仓储, 默认生命周期, 每个作用域一个实例
    #[service]
    #[derive(Debug, Default)]
    pub struct OrderRepository {
        sequence: AtomicU32,
    }

    impl OrderRepository {
        /// 生成下一个订单编号
        pub fn next_order_id(&self) -> u32 {
            1000 + self.sequence.fetch_add(1, Ordering::Relaxed)
        }
    }

    /// 收据打印器, 每次解析都是新实例
    #[service(transient)]
    #[derive(Debug, Default)]
    pub struct ReceiptPrinter;

    impl ReceiptPrinter {
        /// 渲染收据为 JSON 文本
        pub fn render(&self, receipt: &Receipt) -> anyhow::Result<String> {
            Ok(serde_json::to_string_pretty(receipt)?)
        }
    }
}

mod notify {
    use service_macros::service;
    use tracing::info;

    /// 邮件投递接口
    pub trait Mailer: Send + Sync {
        /// 投递一封邮件
        fn deliver(&self, to: &str, subject: &str);
    }

    /// 以 trait 对象注册的单例邮件服务
    #[service(singleton, provides = Mailer)]
    #[derive(Debug, Default)]
    pub struct SmtpMailer;

    impl Mailer for SmtpMailer {
        fn deliver(&self, to: &str, subject: &str) {
            info!("投递邮件: {} -> {}", subject, to);
        }
    }
}

// 示例实体

/// 收据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// 订单编号
    pub order_id: u32,
    /// 金额（分）
    pub total_cents: u64,
    /// 开具时间
    pub issued_at: DateTime<Utc>,
}
