#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};
use tokenmeter_core::{estimate, Currency, ModelId};
use tokenmeter_history::{HistoryItem, HOME_ENV};

pub fn sample_item(text: &str, model: ModelId) -> HistoryItem {
    let result = estimate(text, &model, &Currency::Usd);
    HistoryItem::new(text, model, result)
}

/// Run the binary against an isolated data directory
pub fn tokenmeter(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tokenmeter"))
        .args(args)
        .env(HOME_ENV, home)
        .env_remove("RUST_LOG")
        .current_dir(home)
        .output()
        .expect("failed to run tokenmeter")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
