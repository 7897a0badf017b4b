//! Concurrent first access and concurrent attachment.

use std::sync::{Arc, Barrier};
use std::thread;

use entityhooks::{AttachmentPolicy, LoadObserver};

use crate::helpers::{HookTree, RecordingModel};

const THREADS: usize = 8;

#[test]
fn test_concurrent_first_access_scans_once() {
    let tree = HookTree::new();
    for i in 0..20 {
        tree.script(&format!("host/create/{i:02}.sh"));
    }

    let registry = Arc::new(tree.registry());
    let barrier = Arc::new(Barrier::new(THREADS));

    let addresses: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let barrier = Arc::clone(&barrier);
                scope.spawn(move || {
                    barrier.wait();
                    let hooks = registry.hooks().unwrap();
                    hooks as *const _ as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(registry.scans(), 1);
    assert_eq!(registry.hook_count().unwrap(), 20);
}

#[test]
fn test_concurrent_notifications_attach_once() {
    let tree = HookTree::new();
    tree.script("host/create/a");
    tree.script("host/after_commit/b");

    let registry = Arc::new(tree.registry());
    let policy = Arc::new(AttachmentPolicy::new());
    let observer = Arc::new(LoadObserver::with_policy(
        Arc::clone(&registry),
        Arc::clone(&policy),
    ));
    let host = Arc::new(RecordingModel::new("Host"));
    let barrier = Arc::new(Barrier::new(THREADS));

    let applied: usize = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let observer = Arc::clone(&observer);
                let host = Arc::clone(&host);
                let barrier = Arc::clone(&barrier);
                scope.spawn(move || {
                    barrier.wait();
                    observer.on_type_resolved(&host).unwrap().len()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    assert_eq!(applied, 2);
    assert_eq!(host.lifecycle_wrappers(), 1);
    assert_eq!(policy.attached("Host").len(), 2);

    host.create(&registry);
    assert_eq!(host.invoked().len(), 1);
}
