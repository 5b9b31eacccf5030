//! Installing a registry as the process-wide facade factory.

use std::any::type_name;
use std::sync::Arc;

use assert_matches::assert_matches;
use bridgelog::{Error, Level, LoggerExt, LoggerRegistry, RegistryOptions, init};
use bridgelog_memory::MemoryBackend;

mod service {
    use std::sync::Arc;

    use bridgelog::Logger;

    pub struct Checkout;

    impl Checkout {
        #[inline(never)]
        pub fn logger() -> Arc<dyn Logger> {
            bridgelog_facade::instance()
        }
    }
}

#[test]
fn test_install_routes_facade_through_registry() {
    let backend = MemoryBackend::structured();
    let options = RegistryOptions::default().with_default_level(Level::Debug);
    let registry = init(backend.clone(), options).unwrap();

    let logger = service::Checkout::logger();
    assert_eq!(logger.name(), type_name::<service::Checkout>());
    assert_eq!(logger.level(), Level::Debug);
    assert!(Arc::ptr_eq(
        &logger,
        &registry.get(type_name::<service::Checkout>(), Level::Debug)
    ));

    bridgelog_facade::logger("orders").log("placed");
    let events = backend.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].logger, "orders");

    assert_matches!(
        LoggerRegistry::new(MemoryBackend::structured()).install(),
        Err(Error::FactoryAlreadySet(_))
    );
}
