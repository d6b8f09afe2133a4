use std::sync::Arc;

use injection_common::{marked_services, TypeKey};
use service_macros::service;

pub trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

#[service(singleton, provides = Greeter)]
#[derive(Debug, Default)]
pub struct ConsoleGreeter;

impl Greeter for ConsoleGreeter {
    fn greet(&self) -> String {
        "你好".to_string()
    }
}

fn main() {
    let descriptor = marked_services()
        .into_iter()
        .find(|d| d.implementation == TypeKey::of::<ConsoleGreeter>())
        .expect("ConsoleGreeter 描述符未提交");
    assert_eq!(descriptor.service_key(), TypeKey::of::<dyn Greeter>());

    let instance = descriptor.factory.instantiate();
    let greeter = match instance.downcast::<Arc<dyn Greeter>>() {
        Ok(arc) => (*arc).clone(),
        Err(_) => panic!("实例应包裹 Arc<dyn Greeter>"),
    };
    assert_eq!(greeter.greet(), "你好");
}
