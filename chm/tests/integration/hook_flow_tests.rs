use super::common::{TestEnv, init_test_logging};
use chm::commands::{add::add_hook, edit::edit_hook, remove::remove_hook};
use chm_common::events::{HookEvent, HookKind};
use serde_json::json;
use std::fs;

#[test]
fn test_add_prompt_with_content_materializes_everything() {
    init_test_logging();
    let env = TestEnv::new();

    add_hook(
        &env.paths,
        &env.config,
        HookEvent::SessionStart,
        HookKind::Prompt,
        "my-context",
        None,
        Some("Always use strict mode."),
    )
    .unwrap();

    // Hook file holds the content verbatim.
    let file = env.hook_file("SessionStart/my-context.md");
    assert_eq!(fs::read_to_string(&file).unwrap(), "Always use strict mode.");

    // Metadata entry recorded.
    let metadata = env.read_metadata_value();
    let hooks = metadata["hooks"].as_array().unwrap();
    assert_eq!(hooks.len(), 1);
    assert_eq!(hooks[0]["name"], "my-context");
    assert_eq!(hooks[0]["event"], "SessionStart");
    assert_eq!(hooks[0]["kind"], "prompt");
    assert_eq!(hooks[0]["matcher"], json!(null));
    assert_eq!(hooks[0]["file"], "SessionStart/my-context.md");
    assert!(hooks[0]["createdAt"].is_string());

    // Settings handler registered with the invocation command.
    let settings = env.read_settings_value();
    let groups = settings["hooks"]["SessionStart"].as_array().unwrap();
    assert_eq!(
        groups[0]["hooks"][0]["command"],
        "chm run SessionStart/my-context.md"
    );
}

#[test]
fn test_add_json_event_prompt_stores_plain_content() {
    init_test_logging();
    let env = TestEnv::new();

    // Auto-wrapping happens at run time; the stored file must be plain.
    add_hook(
        &env.paths,
        &env.config,
        HookEvent::PreToolUse,
        HookKind::Prompt,
        "guard",
        Some("Bash"),
        Some("check args"),
    )
    .unwrap();

    let file = env.hook_file("PreToolUse/guard.md");
    assert_eq!(fs::read_to_string(&file).unwrap(), "check args");

    let settings = env.read_settings_value();
    let groups = settings["hooks"]["PreToolUse"].as_array().unwrap();
    assert_eq!(groups[0]["matcher"], "Bash");
}

#[test]
fn test_add_prompt_for_incompatible_event_mutates_nothing() {
    init_test_logging();
    let env = TestEnv::new();

    let err = add_hook(
        &env.paths,
        &env.config,
        HookEvent::Notification,
        HookKind::Prompt,
        "nope",
        None,
        Some("hi"),
    )
    .unwrap_err();

    assert!(err.to_string().contains("side-effect only"));
    assert!(!env.paths.metadata_path.exists());
    assert!(!env.paths.settings_path.exists());
    assert!(!env.hook_file("Notification/nope.md").exists());
}

#[test]
fn test_add_script_for_incompatible_event_is_allowed() {
    init_test_logging();
    let env = TestEnv::new();

    add_hook(
        &env.paths,
        &env.config,
        HookEvent::Notification,
        HookKind::Script,
        "notify",
        None,
        Some("#!/usr/bin/env bash\nexit 0\n"),
    )
    .unwrap();

    assert!(env.hook_file("Notification/notify.sh").exists());
}

#[test]
fn test_duplicate_add_fails_without_store_mutation() {
    init_test_logging();
    let env = TestEnv::new();

    add_hook(
        &env.paths,
        &env.config,
        HookEvent::PreToolUse,
        HookKind::Prompt,
        "x",
        None,
        Some("first"),
    )
    .unwrap();

    let metadata_before = fs::read(&env.paths.metadata_path).unwrap();
    let settings_before = fs::read(&env.paths.settings_path).unwrap();

    let err = add_hook(
        &env.paths,
        &env.config,
        HookEvent::PreToolUse,
        HookKind::Prompt,
        "x",
        Some("Bash"),
        Some("second"),
    )
    .unwrap_err();

    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read(&env.paths.metadata_path).unwrap(), metadata_before);
    assert_eq!(fs::read(&env.paths.settings_path).unwrap(), settings_before);
    // The original file content survives too.
    assert_eq!(
        fs::read_to_string(env.hook_file("PreToolUse/x.md")).unwrap(),
        "first"
    );
}

#[test]
fn test_same_name_on_different_events_is_allowed() {
    init_test_logging();
    let env = TestEnv::new();

    for event in [HookEvent::PreToolUse, HookEvent::PostToolUse] {
        add_hook(
            &env.paths,
            &env.config,
            event,
            HookKind::Prompt,
            "shared-name",
            None,
            Some("content"),
        )
        .unwrap();
    }

    let metadata = env.read_metadata_value();
    assert_eq!(metadata["hooks"].as_array().unwrap().len(), 2);
}

#[test]
fn test_remove_restores_preexisting_settings_bytes() {
    init_test_logging();
    let env = TestEnv::new();

    fs::create_dir_all(&env.paths.claude_dir).unwrap();
    let original = "{\n  \"model\": \"opus\",\n  \"statusLine\": {\n    \"type\": \"command\"\n  }\n}\n";
    fs::write(&env.paths.settings_path, original).unwrap();

    add_hook(
        &env.paths,
        &env.config,
        HookEvent::Stop,
        HookKind::Prompt,
        "wrap-up",
        None,
        Some("summarize"),
    )
    .unwrap();
    assert_ne!(
        fs::read_to_string(&env.paths.settings_path).unwrap(),
        original
    );

    remove_hook(&env.paths, HookEvent::Stop, "wrap-up").unwrap();

    // Foreign keys and their order survive; the emptied hooks key is gone.
    assert_eq!(
        fs::read_to_string(&env.paths.settings_path).unwrap(),
        original
    );
    assert!(!env.hook_file("Stop/wrap-up.md").exists());
    assert_eq!(env.read_metadata_value()["hooks"], json!([]));
}

#[test]
fn test_remove_tolerates_already_deleted_file() {
    init_test_logging();
    let env = TestEnv::new();

    add_hook(
        &env.paths,
        &env.config,
        HookEvent::Stop,
        HookKind::Prompt,
        "gone",
        None,
        Some("content"),
    )
    .unwrap();
    fs::remove_file(env.hook_file("Stop/gone.md")).unwrap();

    remove_hook(&env.paths, HookEvent::Stop, "gone").unwrap();
    assert_eq!(env.read_metadata_value()["hooks"], json!([]));
}

#[test]
fn test_remove_nonexistent_fails_without_store_mutation() {
    init_test_logging();
    let env = TestEnv::new();

    let err = remove_hook(&env.paths, HookEvent::Stop, "ghost").unwrap_err();
    assert!(err.to_string().contains("not found"));
    assert!(!env.paths.metadata_path.exists());
    assert!(!env.paths.settings_path.exists());
}

#[test]
#[cfg(unix)]
fn test_edit_opens_existing_hook() {
    init_test_logging();
    let env = TestEnv::new();

    add_hook(
        &env.paths,
        &env.config,
        HookEvent::SessionStart,
        HookKind::Prompt,
        "ctx",
        None,
        Some("content"),
    )
    .unwrap();

    edit_hook(&env.paths, &env.config, HookEvent::SessionStart, "ctx").unwrap();
}

#[test]
fn test_edit_nonexistent_hook_fails() {
    init_test_logging();
    let env = TestEnv::new();

    let err = edit_hook(&env.paths, &env.config, HookEvent::SessionStart, "ghost").unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
#[cfg(unix)]
fn test_add_without_content_writes_template_and_opens_editor() {
    init_test_logging();
    let env = TestEnv::new();

    add_hook(
        &env.paths,
        &env.config,
        HookEvent::PreToolUse,
        HookKind::Script,
        "probe",
        None,
        None,
    )
    .unwrap();

    let content = fs::read_to_string(env.hook_file("PreToolUse/probe.sh")).unwrap();
    assert!(content.starts_with("#!/usr/bin/env bash\n"));
    assert!(content.contains("# probe - runs on PreToolUse"));
    assert!(content.contains("tool_name"));
}
