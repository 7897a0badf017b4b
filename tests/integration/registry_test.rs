//! Discovery and query behaviour of the registry.

use std::sync::Arc;

use entityhooks::config::hooks::HooksConfig;
use entityhooks::{HookError, HookPath, HookRegistry, ModelType};

use crate::helpers::HookTree;

#[test]
fn test_scenario_sorted_create_and_backup_only_update() {
    let tree = HookTree::new();
    let a = tree.script("host/create/01-a.sh");
    let b = tree.script("host/create/02-b.sh");
    tree.script("host/update/x.sh~");

    let registry = tree.registry();

    let create: Vec<_> = registry
        .find_hooks("Host", "create")
        .unwrap()
        .unwrap()
        .iter()
        .map(|h| h.path().to_path_buf())
        .collect();
    assert_eq!(create, vec![a, b]);

    assert!(registry.find_hooks("Host", "update").unwrap().is_none());
}

#[test]
fn test_returns_exactly_the_valid_hooks() {
    let tree = HookTree::new();
    let keep = [
        tree.script("host/create/10-c"),
        tree.script("host/create/01-a"),
        tree.script("host/create/05-b"),
    ];
    tree.script("host/create/run.sh~");
    tree.script("host/create/run.sh.bak");
    tree.file("host/create/not-executable", 0o644);
    tree.script("host/create/nested/too-deep");
    tree.script("host/create.sh");

    let registry = tree.registry();
    let found: Vec<_> = registry
        .find_hooks("Host", "create")
        .unwrap()
        .unwrap()
        .iter()
        .map(|h| h.path().to_path_buf())
        .collect();

    let mut expected = keep.to_vec();
    expected.sort();
    assert_eq!(found, expected);
}

#[test]
fn test_type_directories_are_camelized() {
    let tree = HookTree::new();
    tree.script("config_template/after_render/notify");

    let registry = tree.registry();
    let hooks = registry
        .find_hooks("ConfigTemplate", "after_render")
        .unwrap()
        .unwrap();
    assert_eq!(hooks.len(), 1);
    assert_eq!(hooks[0].event(), "after_render");
    assert!(registry.find_hooks("config_template", "after_render").unwrap().is_none());
}

#[test]
fn test_events_per_type_and_union() {
    let tree = HookTree::new();
    tree.script("host/create/a");
    tree.script("host/create/b");
    tree.script("host/destroy/c");
    tree.script("domain/custom_signal/d");

    let registry = tree.registry();

    let host: Vec<_> = registry.events_for("Host").unwrap().into_iter().collect();
    assert_eq!(host, vec!["create", "destroy"]);

    let all: Vec<_> = registry.events().unwrap().into_iter().collect();
    assert_eq!(all, vec!["create", "custom_signal", "destroy"]);
}

#[test]
fn test_handles_and_names_are_interchangeable() {
    let tree = HookTree::new();
    tree.script("host/create/a");

    let registry = tree.registry();
    let handle = Arc::new(ModelType::new("Host"));

    let by_name = registry.find_hooks("Host", "create").unwrap().unwrap();
    let by_handle = registry.find_hooks(&handle, "create").unwrap().unwrap();
    assert!(std::ptr::eq(by_name, by_handle));
    assert_eq!(
        registry.events_for(&handle).unwrap(),
        registry.events_for("Host").unwrap()
    );
}

#[test]
fn test_memoized_despite_filesystem_changes() {
    let tree = HookTree::new();
    tree.script("host/create/a");

    let registry = tree.registry();
    let before: *const [HookPath] = registry.find_hooks("Host", "create").unwrap().unwrap();

    tree.script("host/create/b");
    tree.script("domain/update/c");

    let after: *const [HookPath] = registry.find_hooks("Host", "create").unwrap().unwrap();
    assert!(std::ptr::eq(before, after));
    assert!(registry.type_hooks("Domain").unwrap().is_none());
    assert_eq!(registry.scans(), 1);
}

#[test]
fn test_scan_failure_is_not_memoized() {
    let tree = HookTree::new();
    tree.script("host/create/a");
    let link = tree.root().join("loop");
    std::os::unix::fs::symlink(tree.root(), &link).unwrap();

    let config = HooksConfig {
        root: tree.root().to_path_buf(),
        follow_symlinks: true,
        ..HooksConfig::default()
    };
    let registry = HookRegistry::from_config(&config);

    let err: HookError = registry.hooks().unwrap_err();
    assert!(err.is_scan());
    assert!(!registry.is_built());

    std::fs::remove_file(&link).unwrap();
    assert!(registry.find_hooks("Host", "create").unwrap().is_some());
    assert_eq!(registry.scans(), 2);
}

#[test]
fn test_global_install_once() {
    let tree = HookTree::new();
    tree.script("host/create/a");

    let installed = HookRegistry::install(Arc::new(tree.registry())).unwrap();
    let global = HookRegistry::global().unwrap();
    assert!(Arc::ptr_eq(&installed, &global));

    let err = HookRegistry::install(Arc::new(tree.registry())).unwrap_err();
    assert_eq!(err.kind, entityhooks::error::ErrorKind::Conflict);
}

#[tokio::test]
async fn test_build_on_blocking_pool() {
    let tree = HookTree::new();
    tree.script("host/create/a");
    let registry = Arc::new(tree.registry());

    let building = Arc::clone(&registry);
    let count = tokio::task::spawn_blocking(move || building.hook_count())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(count, 1);
    assert!(registry.is_built());
}
