//! Integration tests for ToolRegistry resolution.

use aide_fs::NormalizedPath;
use aide_store::{PromptStore, StoreConfig, ToolDescriptor};
use aide_test_utils::TestEnv;
use aide_tools::{Error, ToolKind, ToolRegistry};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn registry_for(env: &TestEnv) -> ToolRegistry {
    ToolRegistry::new(PromptStore::new(StoreConfig::with_root(env.store_root())))
}

#[rstest]
#[case("claude", "CLAUDE.md")]
#[case("cursor", ".cursorrules")]
fn test_builtin_target_files(#[case] tool: &str, #[case] file: &str) {
    let env = TestEnv::new();
    let registry = registry_for(&env);
    let root = NormalizedPath::new(env.project());

    let target = registry.resolve_target_file(tool, &root).unwrap();
    assert_eq!(target, root.join(file));
}

#[test]
fn test_registered_tool_validates_and_resolves() {
    let env = TestEnv::new();
    let registry = registry_for(&env);
    registry
        .register(&ToolDescriptor::new(
            "vscode",
            ".vscode/settings.json",
            "VS Code settings",
        ))
        .unwrap();

    registry.validate_tool("vscode").unwrap();

    let root = NormalizedPath::new(env.project());
    let target = registry.resolve_target_file("vscode", &root).unwrap();
    assert_eq!(target.as_str(), format!("{}/.vscode/settings.json", root));
}

#[test]
fn test_unregistered_tool_is_unsupported() {
    let env = TestEnv::new();
    let registry = registry_for(&env);
    let root = NormalizedPath::new(env.project());

    assert!(matches!(
        registry.validate_tool("windsurf"),
        Err(Error::UnsupportedTool { .. })
    ));
    assert!(matches!(
        registry.resolve_target_file("windsurf", &root),
        Err(Error::UnsupportedTool { .. })
    ));
}

#[test]
fn test_deleted_descriptor_becomes_unsupported() {
    let env = TestEnv::new();
    let registry = registry_for(&env);
    registry
        .register(&ToolDescriptor::new("zed", ".rules", "Zed"))
        .unwrap();
    registry.validate_tool("zed").unwrap();

    std::fs::remove_file(env.store_root().join("tools/zed.json")).unwrap();

    let root = NormalizedPath::new(env.project());
    assert!(matches!(
        registry.resolve_target_file("zed", &root),
        Err(Error::UnsupportedTool { .. })
    ));
}

#[rstest]
#[case("claude")]
#[case("cursor")]
fn test_stored_descriptor_cannot_override_builtin(#[case] name: &str) {
    let env = TestEnv::new();
    let store = PromptStore::new(StoreConfig::with_root(env.store_root()));
    // Bypass register(), which refuses built-in names.
    store
        .save_tool_descriptor(&ToolDescriptor::new(name, "HIJACKED.md", "impostor"))
        .unwrap();
    let registry = ToolRegistry::new(store);

    let kind = registry.resolve(name).unwrap();
    assert!(kind.is_builtin());

    let root = NormalizedPath::new(env.project());
    let target = registry.resolve_target_file(name, &root).unwrap();
    assert!(!target.as_str().ends_with("HIJACKED.md"));
}

#[test]
fn test_corrupt_descriptor_reports_parse_error() {
    let env = TestEnv::new();
    env.write_store_file("tools/broken.json", "{");
    let registry = registry_for(&env);

    let err = registry.validate_tool("broken").unwrap_err();
    assert!(matches!(
        err,
        Error::Store(aide_store::Error::Parse { .. })
    ));
}

#[test]
fn test_resolve_returns_descriptor_kind() {
    let env = TestEnv::new();
    let registry = registry_for(&env);
    let descriptor = ToolDescriptor::new("aider", ".aider.conf.md", "Aider").with_header("# Aider");
    registry.register(&descriptor).unwrap();

    assert_eq!(
        registry.resolve("aider").unwrap(),
        ToolKind::Descriptor(descriptor)
    );
}

#[test]
fn test_list_builtins_first_then_sorted_descriptors() {
    let env = TestEnv::new();
    let registry = registry_for(&env);
    registry
        .register(&ToolDescriptor::new("zed", ".rules", "Zed"))
        .unwrap();
    registry
        .register(&ToolDescriptor::new("aider", ".aider.md", "Aider"))
        .unwrap();
    registry
        .store()
        .save_tool_descriptor(&ToolDescriptor::new("claude", "X.md", "shadowed"))
        .unwrap();

    let entries = registry.list().unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();

    assert_eq!(names, vec!["claude", "cursor", "aider", "zed"]);
    assert!(entries[0].builtin);
    assert_eq!(entries[0].target_file_name, "CLAUDE.md");
    assert!(!entries[2].builtin);
    assert_eq!(entries[2].description, "Aider");
}
