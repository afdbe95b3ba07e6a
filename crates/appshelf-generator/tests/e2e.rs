//! End-to-end tests for the Appshelf generation engine.
//!
//! Scaffold apps into a temporary tree, build the index, and verify the
//! written document.

use std::fs;

use tempfile::TempDir;

use appshelf_generator::{Builder, ScaffoldOptions, Scaffolder};

#[test]
fn test_scaffold_then_build() {
    let tmp = TempDir::new().unwrap();
    let apps = tmp.path().join("apps");
    let output = tmp.path().join("index.html");

    let scaffolder = Scaffolder::new(&apps);
    for name in ["zeta", "alpha-beta", "apple"] {
        scaffolder.scaffold(name, &ScaffoldOptions::default()).unwrap();
    }

    let stats = Builder::new(&apps, &output).build().unwrap();
    assert_eq!(stats.apps, 3);

    let html = fs::read_to_string(&output).unwrap();

    // Cards appear in ascending case-insensitive folder order.
    let alpha = html.find("Alpha Beta").unwrap();
    let apple = html.find(">Apple<").unwrap();
    let zeta = html.find(">Zeta<").unwrap();
    assert!(alpha < apple);
    assert!(apple < zeta);

    assert!(html.contains(r#"href="./apps/alpha-beta/""#));
    assert!(html.contains(r#"href="./apps/apple/""#));
    assert!(html.contains(r#"href="./apps/zeta/""#));
    assert_eq!(html.matches(r#"class="card""#).count(), 3);
    assert!(html.contains("3 / 3"));
    assert!(!html.contains("No apps found"));
}

#[test]
fn test_scaffolded_app_is_discoverable() {
    let tmp = TempDir::new().unwrap();
    let apps = tmp.path().join("apps");
    let output = tmp.path().join("index.html");

    // A folder without an entry file must not show up.
    fs::create_dir_all(apps.join("not-ready")).unwrap();

    Scaffolder::new(&apps)
        .scaffold("my-cool-app", &ScaffoldOptions::default())
        .unwrap();

    Builder::new(&apps, &output).build().unwrap();
    let html = fs::read_to_string(&output).unwrap();

    assert!(html.contains("My Cool App"));
    assert!(!html.contains("not-ready"));
}

#[test]
fn test_scaffold_conflict_leaves_index_rebuildable() {
    let tmp = TempDir::new().unwrap();
    let apps = tmp.path().join("apps");
    let output = tmp.path().join("index.html");

    let scaffolder = Scaffolder::new(&apps);
    scaffolder.scaffold("taken", &ScaffoldOptions::default()).unwrap();

    let err = scaffolder
        .scaffold("taken", &ScaffoldOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains("taken"));

    // The tree still indexes cleanly after the failed scaffold.
    let stats = Builder::new(&apps, &output).build().unwrap();
    assert_eq!(stats.apps, 1);
}

#[test]
fn test_empty_tree_builds_empty_state() {
    let tmp = TempDir::new().unwrap();
    let apps = tmp.path().join("apps");
    let output = tmp.path().join("index.html");

    let stats = Builder::new(&apps, &output).build().unwrap();
    assert_eq!(stats.apps, 0);

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("No apps found"));
    assert_eq!(html.matches(r#"class="card""#).count(), 0);
}
