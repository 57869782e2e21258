//! CLI output formatting module
//!
//! Human-readable and JSON rendering for command results.

pub mod table;

use serde_json::Value;

/// A command result that can render itself for humans or as JSON.
pub trait CommandOutput {
    fn to_human(&self) -> String;
    fn to_json(&self) -> Value;
}

/// Print a command result in the selected mode.
pub fn output<T: CommandOutput>(data: &T, json_mode: bool) {
    if json_mode {
        let value = data.to_json();
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string()));
    } else {
        println!("{}", data.to_human());
    }
}
