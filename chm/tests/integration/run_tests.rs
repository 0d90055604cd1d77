use super::common::{TestEnv, init_test_logging};
use chm::commands::run::run_hook_at;
use std::fs;

fn write_hook(env: &TestEnv, relative: &str, content: &str) {
    let path = env.hook_file(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
}

#[test]
fn test_run_unknown_extension_fails_before_execution() {
    init_test_logging();
    let env = TestEnv::new();
    write_hook(&env, "Stop/hook.txt", "anything");

    let err = run_hook_at(&env.paths, &env.config, "Stop/hook.txt").unwrap_err();
    assert!(err.to_string().contains("unknown file extension"));
}

#[test]
fn test_run_prompt_for_incompatible_event_fails() {
    init_test_logging();
    let env = TestEnv::new();
    write_hook(&env, "Notification/ping.md", "hello");

    let err = run_hook_at(&env.paths, &env.config, "Notification/ping.md").unwrap_err();
    assert!(err.to_string().contains("side-effect only"));
}

#[test]
fn test_run_prompt_succeeds_for_plaintext_event() {
    init_test_logging();
    let env = TestEnv::new();
    write_hook(&env, "SessionStart/ctx.md", "use strict mode");

    let code = run_hook_at(&env.paths, &env.config, "SessionStart/ctx.md").unwrap();
    assert_eq!(code, 0);
}

#[test]
fn test_run_missing_prompt_file_is_error() {
    init_test_logging();
    let env = TestEnv::new();

    assert!(run_hook_at(&env.paths, &env.config, "SessionStart/absent.md").is_err());
}

#[test]
#[cfg(unix)]
fn test_run_script_propagates_exit_code() {
    init_test_logging();
    let env = TestEnv::new();
    write_hook(&env, "Stop/fail.sh", "#!/usr/bin/env bash\nexit 7\n");

    let code = run_hook_at(&env.paths, &env.config, "Stop/fail.sh").unwrap();
    assert_eq!(code, 7);
}

#[test]
#[cfg(unix)]
fn test_run_script_success_is_zero() {
    init_test_logging();
    let env = TestEnv::new();
    write_hook(&env, "Stop/ok.sh", "#!/usr/bin/env bash\nexit 0\n");

    let code = run_hook_at(&env.paths, &env.config, "Stop/ok.sh").unwrap();
    assert_eq!(code, 0);
}

#[test]
#[cfg(unix)]
fn test_run_script_uses_project_dir_override_as_cwd() {
    init_test_logging();
    let mut env = TestEnv::new();
    let workdir = tempfile::TempDir::new().unwrap();
    env.config.project_dir = Some(workdir.path().to_path_buf());

    write_hook(&env, "Stop/mark.sh", "#!/usr/bin/env bash\ntouch marker.txt\n");

    let code = run_hook_at(&env.paths, &env.config, "Stop/mark.sh").unwrap();
    assert_eq!(code, 0);
    assert!(workdir.path().join("marker.txt").exists());
}
