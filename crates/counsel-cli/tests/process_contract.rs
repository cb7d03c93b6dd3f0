use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn run(root: &Path, args: &[&str]) -> Output {
    let mut invocation = vec!["--root", root.to_str().expect("root path")];
    invocation.extend_from_slice(args);
    Command::new(env!("CARGO_BIN_EXE_counsel"))
        // Keep the contract local: never pick up a real provider key.
        .env_remove("COUNSEL_OPENAI_API_KEY")
        .env_remove("COUNSEL_TOPICS")
        .args(invocation)
        .output()
        .expect("run counsel")
}

#[test]
fn classify_process_contract_emits_matched_topic_json() {
    let root = tempdir().expect("tempdir");
    let output = run(root.path(), &["classify", "What is bail and who can be a surety?"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"matched_key\": \"bail\""));
    assert!(stdout.contains("\"source\": \"scorer\""));
}

#[test]
fn classify_process_contract_falls_back_on_nonsense() {
    let root = tempdir().expect("tempdir");
    let output = run(root.path(), &["classify", "asdkjasdkj nonsense text"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"source\": \"fallback\""));
    assert!(stdout.contains("\"citation\": \"General Legal Guidance\""));
    assert!(stdout.contains("0.3"));
}

#[test]
fn classify_explain_process_contract_includes_breakdown() {
    let root = tempdir().expect("tempdir");
    let output = run(root.path(), &["classify", "ipc 302 murder", "--explain"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"breakdown\""));
    assert!(stdout.contains("\"phrase_bonus\""));
    assert!(stdout.contains("\"ipc 302\""));
}

#[test]
fn ask_process_contract_answers_without_a_provider() {
    let root = tempdir().expect("tempdir");
    let output = run(root.path(), &["ask", "What is bail?"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"matched_key\": \"bail\""));

    let log_path = root.path().join("logs").join("requests.jsonl");
    let log = std::fs::read_to_string(log_path).expect("request log written");
    assert!(log.contains("\"operation\":\"ask\""));
}

#[test]
fn topics_show_process_contract_fails_on_unknown_key() {
    let root = tempdir().expect("tempdir");
    let output = run(root.path(), &["topics", "show", "no-such-topic"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"));
}

#[test]
fn status_process_contract_reports_local_scorer() {
    let root = tempdir().expect("tempdir");
    let output = run(root.path(), &["status"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"provider\": \"rule-based scorer\""));
    assert!(stdout.contains("\"table_source\": \"builtin\""));
}
