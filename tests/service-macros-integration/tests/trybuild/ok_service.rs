use injection_common::{marked_services, Lifetime, TypeKey};
use service_macros::service;

#[service(transient)]
#[derive(Debug, Default)]
pub struct AuditTrail {
    pub entries: Vec<String>,
}

fn main() {
    let descriptor = marked_services()
        .into_iter()
        .find(|d| d.implementation == TypeKey::of::<AuditTrail>())
        .expect("AuditTrail 描述符未提交");
    assert_eq!(descriptor.lifetime, Lifetime::Transient);
    assert!(descriptor.service.is_none());
}
