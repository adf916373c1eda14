mod common;

use common::{stderr, stdout, tokenmeter};

#[test]
fn test_estimate_json() {
    let temp = tempfile::TempDir::new().unwrap();
    let output = tokenmeter(temp.path(), &["estimate", "hello world", "--json"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["model"], "GPT-4o");
    assert_eq!(value["count"]["tokens"], 3);
    assert_eq!(value["count"]["words"], 2);
    assert_eq!(value["outputRatio"], 50);
    assert!(value.get("savedId").is_none());
}

#[test]
fn test_estimate_reads_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let prompt = temp.path().join("prompt.txt");
    std::fs::write(&prompt, "你好世界").unwrap();

    let output = tokenmeter(
        temp.path(),
        &["estimate", "--file", prompt.to_str().unwrap(), "--json"],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["count"]["tokens"], 4);
}

#[test]
fn test_settings_drive_estimate_currency() {
    let temp = tempfile::TempDir::new().unwrap();
    let set = tokenmeter(
        temp.path(),
        &["settings", "set", "--currency", "EUR (€)", "--ratio", "80"],
    );
    assert!(set.status.success(), "{}", stderr(&set));
    assert!(stdout(&set).contains("EUR (€)"));

    let output = tokenmeter(temp.path(), &["estimate", "abcdefgh", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["cost"]["currency"], "EUR (€)");
    assert_eq!(value["outputRatio"], 80);

    let reset = tokenmeter(temp.path(), &["settings", "reset"]);
    assert!(stdout(&reset).contains("USD ($)"));
}

#[test]
fn test_save_star_and_export() {
    let temp = tempfile::TempDir::new().unwrap();
    let saved = tokenmeter(
        temp.path(),
        &["estimate", "save me please", "--save", "--json"],
    );
    assert!(saved.status.success(), "{}", stderr(&saved));
    let value: serde_json::Value = serde_json::from_str(&stdout(&saved)).unwrap();
    let id = value["savedId"].as_str().unwrap().to_string();

    let star = tokenmeter(temp.path(), &["history", "star", &id]);
    assert!(star.status.success(), "{}", stderr(&star));

    let listed = tokenmeter(temp.path(), &["history", "--starred"]);
    assert!(stdout(&listed).contains(&id));

    let export_path = temp.path().join("out.json");
    let export = tokenmeter(
        temp.path(),
        &[
            "history",
            "export",
            "--format",
            "json",
            "--output",
            export_path.to_str().unwrap(),
        ],
    );
    assert!(export.status.success(), "{}", stderr(&export));
    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&export_path).unwrap()).unwrap();
    assert_eq!(exported[0]["id"], id.as_str());
    assert_eq!(exported[0]["starred"], true);
    assert_eq!(exported[0]["modelId"], "GPT-4o");
}

#[test]
fn test_export_default_file_name() {
    let temp = tempfile::TempDir::new().unwrap();
    tokenmeter(temp.path(), &["estimate", "x", "--save"]);
    let export = tokenmeter(temp.path(), &["history", "export"]);
    assert!(export.status.success(), "{}", stderr(&export));

    let name = format!(
        "token_history_{}.csv",
        chrono::Utc::now().format("%Y-%m-%d")
    );
    let csv = std::fs::read_to_string(temp.path().join(name)).unwrap();
    assert!(csv.starts_with("Date,Model,Tokens,Text Preview,Cost"));
}

#[test]
fn test_star_unknown_id_fails() {
    let temp = tempfile::TempDir::new().unwrap();
    let output = tokenmeter(temp.path(), &["history", "star", "missing-id"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("missing-id"));
}

#[test]
fn test_remove_and_clear() {
    let temp = tempfile::TempDir::new().unwrap();
    tokenmeter(temp.path(), &["estimate", "one", "--save"]);
    tokenmeter(temp.path(), &["estimate", "two", "--save"]);

    let stats = tokenmeter(temp.path(), &["history", "--stats"]);
    assert!(stdout(&stats).contains("Total records: 2"));

    let clear = tokenmeter(temp.path(), &["history", "clear"]);
    assert!(clear.status.success());
    let listed = tokenmeter(temp.path(), &["history"]);
    assert!(stdout(&listed).contains("No history"));
}

#[test]
fn test_unknown_model_warns() {
    let temp = tempfile::TempDir::new().unwrap();
    let output = tokenmeter(
        temp.path(),
        &["estimate", "abcd", "--model", "Mystery", "--json"],
    );
    assert!(output.status.success());
    assert!(stderr(&output).contains("unknown model"));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["model"], "Mystery");
}

#[test]
fn test_optimize_apply() {
    let temp = tempfile::TempDir::new().unwrap();
    let output = tokenmeter(temp.path(), &["optimize", "这个非常好", "--apply"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "这个很好");
}

#[test]
fn test_models_lists_table() {
    let temp = tempfile::TempDir::new().unwrap();
    let output = tokenmeter(temp.path(), &["models"]);
    assert!(stdout(&output).contains("DeepSeek Reasoner"));
}
