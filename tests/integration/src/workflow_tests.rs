//! Workflow tests spanning store, registry and apply
//!
//! Each test plays a sequence a user would type at the shell, driven through
//! the library API against one temporary home and project.

use aide_fs::NormalizedPath;
use aide_store::{PromptStore, StoreConfig, ToolDescriptor};
use aide_test_utils::TestEnv;
use aide_tools::{ApplyOptions, ToolRegistry, apply, parse_categories};
use pretty_assertions::assert_eq;
use regex::Regex;

fn open(env: &TestEnv) -> ToolRegistry {
    ToolRegistry::new(PromptStore::new(StoreConfig::with_root(env.store_root())))
}

fn run_apply(env: &TestEnv, registry: &ToolRegistry, tool: &str, categories: &str) -> usize {
    let root = NormalizedPath::new(env.project());
    apply(
        registry,
        tool,
        &parse_categories(categories),
        &root,
        ApplyOptions::default(),
    )
    .unwrap()
    .appended
}

#[test]
fn test_one_project_many_tools() {
    let env = TestEnv::new();
    let registry = open(&env);
    let store = registry.store();

    store.save_prompt("claude", "review", "Check for SQL injection").unwrap();
    store.save_prompt("cursor", "review", "Check for SQL injection").unwrap();
    registry
        .register(&ToolDescriptor::new("vscode", ".vscode/settings.json", "VS Code settings"))
        .unwrap();
    store.save_prompt("vscode", "general", "Use 2-space indent").unwrap();

    assert_eq!(run_apply(&env, &registry, "claude", "review"), 1);
    assert_eq!(run_apply(&env, &registry, "cursor", "review"), 1);
    assert_eq!(run_apply(&env, &registry, "vscode", "general"), 1);

    env.assert_project_file_contains("CLAUDE.md", "Check for SQL injection");
    env.assert_project_file_contains(".cursorrules", "Check for SQL injection");
    env.assert_project_file_contains(".vscode/settings.json", "Use 2-space indent");

    // Each tool dedups against its own file only.
    assert_eq!(run_apply(&env, &registry, "claude", "review"), 0);
}

#[test]
fn test_reapply_after_prompt_edit_appends_new_text() {
    let env = TestEnv::new();
    let registry = open(&env);
    let store = registry.store();

    store.save_prompt("claude", "style", "Prefer iterators").unwrap();
    run_apply(&env, &registry, "claude", "style");

    store
        .save_prompt("claude", "style", "Prefer iterators over index loops")
        .unwrap();
    assert_eq!(run_apply(&env, &registry, "claude", "style"), 1);

    let content = env.read_project_file("CLAUDE.md");
    let markers = Regex::new(r"added by aide on \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}").unwrap();
    assert_eq!(markers.find_iter(&content).count(), 2);
    assert!(content.ends_with("Prefer iterators over index loops\n"));
}

#[test]
fn test_hand_written_rules_survive() {
    let env = TestEnv::new();
    let registry = open(&env);
    let handwritten = "# Team rules\n\n- No force pushes\n";
    env.write_project_file("CLAUDE.md", handwritten);

    registry
        .store()
        .save_prompt("claude", "review", "Check for SQL injection")
        .unwrap();
    run_apply(&env, &registry, "claude", "review");

    let content = env.read_project_file("CLAUDE.md");
    assert!(content.starts_with(handwritten));
    assert!(content.contains("\n\n# aide prompts\n"));
}

#[test]
fn test_store_layout_on_disk() {
    let env = TestEnv::new();
    let registry = open(&env);
    registry
        .store()
        .save_prompt("claude", "review", "text")
        .unwrap();
    registry
        .register(
            &ToolDescriptor::new("zed", ".rules", "Zed rules").with_header("# Zed"),
        )
        .unwrap();

    let root = env.store_root();
    assert_eq!(
        std::fs::read_to_string(root.join("claude/review.txt")).unwrap(),
        "text"
    );

    let raw = std::fs::read_to_string(root.join("tools/zed.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["name"], "zed");
    assert_eq!(json["fileName"], ".rules");
    assert_eq!(json["description"], "Zed rules");
    assert_eq!(json["header"], "# Zed");
    assert_eq!(json["separator"], "# ---");

    let all = registry.store().list_all_prompts().unwrap();
    assert!(!all.contains_key("tools"));
    assert!(all.contains_key("claude"));
}

#[test]
fn test_descriptor_written_by_hand_is_usable() {
    let env = TestEnv::new();
    env.write_store_file(
        "tools/aider.json",
        r##"{"name":"aider","fileName":"CONVENTIONS.md","description":"Aider conventions","header":"","separator":"# ---"}"##,
    );
    env.write_store_file("aider/general.txt", "Write small commits");

    let registry = open(&env);
    assert_eq!(run_apply(&env, &registry, "aider", "general"), 1);
    env.assert_project_file_contains("CONVENTIONS.md", "# Aider conventions - added by aide on");
}
