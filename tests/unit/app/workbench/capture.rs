use super::*;

#[test]
fn guard_registers_until_dropped() {
    let registry = CaptureRegistry::new();
    assert_eq!(registry.active(), 0);

    let first = registry.acquire();
    assert_eq!(registry.active(), 1);
    let second = registry.clone().acquire();
    assert_eq!(registry.active(), 2);

    drop(first);
    assert_eq!(registry.active(), 1);
    drop(second);
    assert_eq!(registry.active(), 0);
}

#[test]
fn guard_outliving_registry_handle_still_releases() {
    let registry = CaptureRegistry::new();
    let observer = registry.clone();
    let guard = registry.acquire();
    drop(registry);

    assert_eq!(observer.active(), 1);
    drop(guard);
    assert_eq!(observer.active(), 0);
}
