//! Integration tests for end-to-end resolution.
//!
//! Each test builds its own registry and working directory, so they run in
//! parallel without touching the process environment or cwd.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use resfind_core::{
    EmbeddedBundle, FixedUserDirectory, RecordingSink, ResolveError, ResolverConfig,
    ResourceResolver, ResourceSource, SearchPathRegistry, Severity,
};
use serde_json::Value;
use tempfile::{TempDir, tempdir};

struct Harness {
    root: TempDir,
    sink: Arc<RecordingSink>,
    registry: Arc<SearchPathRegistry>,
}

impl Harness {
    fn new() -> Self {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join("cwd")).unwrap();
        let sink = Arc::new(RecordingSink::new());
        let registry = Arc::new(SearchPathRegistry::new(
            &ResolverConfig::default(),
            Arc::new(FixedUserDirectory::new(root.path().join("Documents"))),
            sink.clone(),
        ));
        Self {
            root,
            sink,
            registry,
        }
    }

    fn dir(&self, name: &str) -> std::path::PathBuf {
        self.root.path().join(name)
    }

    fn search(&self, names: &[&str]) {
        let raw = names
            .iter()
            .map(|name| self.dir(name).display().to_string())
            .collect::<Vec<_>>()
            .join(";");
        assert!(self.registry.set_search_paths(Some(&raw)));
    }

    fn resolver(&self) -> ResourceResolver {
        ResourceResolver::new(Arc::clone(&self.registry)).with_working_dir(self.dir("cwd"))
    }
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn falls_through_to_second_search_directory() {
    let h = Harness::new();
    h.search(&["a", "b"]);
    fs::create_dir_all(h.dir("b")).unwrap();
    write(&h.dir("b").join("config.json"), r#"{"x":1}"#);

    let mut res = h.resolver().resolve("config.json").unwrap();

    assert_eq!(
        res.location(),
        h.dir("b").join("config.json").to_string_lossy()
    );
    assert_eq!(res.source(), ResourceSource::SearchPath { index: 1 });
    let view = res.structured_view().unwrap();
    assert_eq!(view.get("x"), Some(&Value::from(1)));
    assert!(!res.is_open());
}

#[test]
fn malformed_json_degrades_to_empty_view() {
    let h = Harness::new();
    h.search(&["a", "b"]);
    write(&h.dir("b").join("config.json"), "not json");

    let mut res = h.resolver().resolve("config.json").unwrap();

    assert!(res.structured_view().unwrap().is_empty());
    assert!(!res.is_open());
    assert!(res.last_error().is_some());
    assert_eq!(h.sink.at_least(Severity::Error).len(), 1);
}

#[test]
fn working_directory_beats_search_paths_and_bundles() {
    let h = Harness::new();
    h.search(&["a"]);
    write(&h.dir("a").join("config.json"), "search");
    write(&h.dir("cwd").join("config.json"), "local");

    let resolver = h
        .resolver()
        .with_embedded(EmbeddedBundle::new().with_resource("config.json", &b"bundled"[..]));
    let res = resolver.resolve("config.json").unwrap();

    assert_eq!(res.location(), "config.json");
    assert_eq!(res.source(), ResourceSource::WorkingDirectory);
}

#[test]
fn first_search_directory_wins_over_later_ones() {
    let h = Harness::new();
    h.search(&["a", "b"]);
    write(&h.dir("a").join("config.json"), "first");
    write(&h.dir("b").join("config.json"), "second");

    let res = h.resolver().resolve("config.json").unwrap();

    assert_eq!(
        res.location(),
        h.dir("a").join("config.json").to_string_lossy()
    );
}

#[test]
fn missing_everywhere_is_not_found() {
    let h = Harness::new();
    h.search(&["a"]);

    let err = h.resolver().resolve("absent.json").unwrap_err();

    assert!(matches!(err, ResolveError::NotFound { ref name } if name == "absent.json"));
    assert_eq!(err.to_string(), "Resource not found: absent.json");
}

#[test]
fn first_search_directory_is_created() {
    let h = Harness::new();
    let first = h.dir("nested").join("deeper").join("overrides");
    assert!(!first.exists());

    h.registry
        .set_search_paths(Some(&first.display().to_string()));

    assert!(first.is_dir());
}

#[test]
fn blank_configuration_keeps_previous_list() {
    let h = Harness::new();
    h.search(&["a", "b"]);
    let before = h.registry.search_paths();

    h.registry.set_search_paths(None);
    h.registry.set_search_paths(Some(""));

    assert_eq!(h.registry.search_paths(), before);
}

#[test]
fn default_search_path_lives_under_documents() {
    let h = Harness::new();
    write(
        &h.dir("Documents").join("resfind").join("skin.json"),
        r#"{"color":"red"}"#,
    );

    let mut res = h.resolver().resolve("skin.json").unwrap();

    assert_eq!(res.source(), ResourceSource::SearchPath { index: 0 });
    assert_eq!(
        res.structured_view().unwrap().get("color"),
        Some(&Value::from("red"))
    );
}

#[test]
fn embedded_resources_are_the_last_resort() {
    let h = Harness::new();
    h.search(&["a"]);
    let resolver = h
        .resolver()
        .with_embedded(EmbeddedBundle::new().with_resource("config.json", &br#"{"x":2}"#[..]));

    let mut res = resolver.resolve("config.json").unwrap();

    assert_eq!(res.location(), "config.json");
    assert_eq!(res.source(), ResourceSource::Bundled);
    assert_eq!(
        res.structured_view().unwrap().get("x"),
        Some(&Value::from(2))
    );
}

#[test]
fn previously_registered_roots_still_serve_bundled_lookups() {
    let h = Harness::new();
    h.search(&["old"]);
    write(&h.dir("old").join("legacy.json"), "{}");
    h.search(&["new"]);

    let res = h.resolver().resolve("legacy.json").unwrap();

    assert_eq!(res.source(), ResourceSource::Bundled);
    assert_eq!(res.location(), "legacy.json");
}

#[test]
fn copy_saves_a_customized_copy() {
    let h = Harness::new();
    let resolver = h
        .resolver()
        .with_embedded(EmbeddedBundle::new().with_resource("config.json", &b"defaults"[..]));
    let target = h.registry.search_paths()[0].join("config.json");

    let mut res = resolver.resolve("config.json").unwrap();
    assert!(res.copy_to(&target));
    res.close();
    res.close();

    let res = resolver.resolve("config.json").unwrap();
    assert_eq!(res.source(), ResourceSource::SearchPath { index: 0 });
    assert_eq!(fs::read_to_string(target).unwrap(), "defaults");
}

#[test]
fn process_working_directory_is_used_by_default() {
    let registry = Arc::new(SearchPathRegistry::new(
        &ResolverConfig::default(),
        Arc::new(FixedUserDirectory::unavailable()),
        Arc::new(RecordingSink::new()),
    ));
    let resolver = ResourceResolver::new(registry);

    // cargo runs integration tests from the package root
    let res = resolver.resolve("Cargo.toml").unwrap();

    assert_eq!(res.location(), "Cargo.toml");
    assert_eq!(res.source(), ResourceSource::WorkingDirectory);
}
