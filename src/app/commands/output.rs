//! One-line JSON run summary.
//!
//! Written to stdout on success, and appended as `json=<...>` to the file
//! named by `GITHUB_OUTPUT` when set so later workflow steps can read it.

use std::fs::OpenOptions;
use std::io::Write;

use serde::Serialize;

use crate::domain::AppError;

const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";

/// Serialize a command summary as compact JSON and emit it.
pub fn write_summary<T: Serialize>(summary: &T) -> Result<(), AppError> {
    let json = summary_json(summary)?;
    println!("{json}");

    if let Some(path) = std::env::var_os(GITHUB_OUTPUT) {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| AppError::Internal(format!("Failed to open {GITHUB_OUTPUT}: {e}")))?;
        writeln!(file, "json={json}")
            .map_err(|e| AppError::Internal(format!("Failed to write {GITHUB_OUTPUT}: {e}")))?;
    }

    Ok(())
}

fn summary_json<T: Serialize>(summary: &T) -> Result<String, AppError> {
    let json = serde_json::to_string(summary)
        .map_err(|e| AppError::Internal(format!("Failed to serialize run summary: {e}")))?;
    debug_assert!(!json.contains('\n'), "summary JSON must be single-line");
    Ok(json)
}
