use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Barrier};
use std::thread;
use std::time::Duration;

use singleton_registry::{global, SingletonRegistry};

#[derive(Debug)]
struct ServiceContext {
    name: String,
}

#[derive(Debug)]
struct BackendHandle {
    #[allow(dead_code)]
    dsn: String,
}

/// N threads race on the first access; exactly one construction must occur
/// and every thread must observe the same instance.
#[test]
fn test_concurrent_first_access_constructs_once() {
    let registry = Arc::new(SingletonRegistry::new());
    let constructions = Arc::new(AtomicUsize::new(0));
    let threads = 16;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let constructions = Arc::clone(&constructions);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry
                    .get_or_create::<ServiceContext, String, _>(|| {
                        constructions.fetch_add(1, Ordering::SeqCst);
                        Ok(ServiceContext { name: "accounts".to_string() })
                    })
                    .expect("construction should succeed")
            })
        })
        .collect();

    let instances: Vec<Arc<ServiceContext>> =
        handles.into_iter().map(|h| h.join().expect("thread panicked")).collect();

    assert_eq!(constructions.load(Ordering::SeqCst), 1);
    let first = &instances[0];
    for instance in &instances {
        assert!(Arc::ptr_eq(first, instance));
        assert_eq!(instance.name, "accounts");
    }
}

/// Once a type is constructed, reads of it must not stall even while another
/// type's construction is blocked inside the guard.
#[test]
fn test_reads_do_not_block_on_foreign_construction() {
    let registry = Arc::new(SingletonRegistry::new());
    registry
        .get_or_create::<ServiceContext, String, _>(|| {
            Ok(ServiceContext { name: "cms".to_string() })
        })
        .expect("construction should succeed");

    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel::<()>();

    let blocked = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            registry
                .get_or_create::<BackendHandle, String, _>(move || {
                    entered_tx.send(()).unwrap();
                    release_rx.recv().unwrap();
                    Ok(BackendHandle { dsn: "backend.db".to_string() })
                })
                .expect("construction should succeed")
        })
    };

    // Wait until the BackendHandle factory is parked inside the guard.
    entered_rx.recv_timeout(Duration::from_secs(5)).expect("factory never started");

    let reader = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            let via_get = registry.get::<ServiceContext>().expect("instance should exist");
            let via_create = registry
                .get_or_create::<ServiceContext, String, _>(|| {
                    panic!("already constructed, factory must not run")
                })
                .expect("fast path should succeed");
            assert!(Arc::ptr_eq(&via_get, &via_create));
        })
    };

    reader.join().expect("reads stalled behind an unrelated construction");

    release_tx.send(()).unwrap();
    blocked.join().expect("blocked construction failed");
}

/// A failed construction must not be cached: the next call retries and can
/// succeed once the underlying cause is gone.
#[test]
fn test_failed_construction_is_retried() {
    let registry = SingletonRegistry::new();
    let attempts = AtomicUsize::new(0);

    let first = registry.get_or_create::<ServiceContext, String, _>(|| {
        attempts.fetch_add(1, Ordering::SeqCst);
        Err("backing source unavailable".to_string())
    });
    assert_eq!(first.unwrap_err(), "backing source unavailable");
    assert!(registry.get::<ServiceContext>().is_none());

    let second = registry
        .get_or_create::<ServiceContext, String, _>(|| {
            attempts.fetch_add(1, Ordering::SeqCst);
            Ok(ServiceContext { name: "portal".to_string() })
        })
        .expect("retry should succeed");
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
    assert_eq!(second.name, "portal");
}

/// `get` is a pure probe: it never constructs.
#[test]
fn test_get_before_construction_returns_none() {
    let registry = SingletonRegistry::new();
    assert!(registry.get::<BackendHandle>().is_none());
}

/// The process-wide registry hands out the same instance from every thread.
#[test]
fn test_global_registry_is_shared() {
    struct PortalContext {
        page_size: usize,
    }

    let here = global()
        .get_or_create::<PortalContext, String, _>(|| Ok(PortalContext { page_size: 20 }))
        .expect("construction should succeed");

    let there = thread::spawn(|| {
        global()
            .get_or_create::<PortalContext, String, _>(|| {
                panic!("already constructed, factory must not run")
            })
            .expect("fast path should succeed")
    })
    .join()
    .expect("thread panicked");

    assert!(Arc::ptr_eq(&here, &there));
    assert_eq!(there.page_size, 20);
}
