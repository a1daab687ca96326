//! Provenance blocks for `report` and the sidecar next to `solve --out`.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Revision and crate version, the common part of every provenance block.
pub fn header() -> Value {
    json!({
        "code_rev": code_rev(),
        "version": lagoon::VERSION,
    })
}

/// Write the provenance of `result` to `<stem>.provenance.json` beside it.
///
/// Records the run `params`, the result path and the caller's source location.
#[track_caller]
pub fn write_sidecar(result: &Path, params: Value) -> Result<PathBuf> {
    let callsite = Location::caller();
    let mut doc = header();
    doc["callsite"] = json!(format!("{}:{}", callsite.file(), callsite.line()));
    doc["params"] = params;
    doc["outputs"] = json!([result.to_string_lossy()]);

    let path = sidecar_path(result);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `out/area.json` → `out/area.provenance.json`.
fn sidecar_path(result: &Path) -> PathBuf {
    result.with_extension("provenance.json")
}

/// Build-time `GIT_COMMIT`, then the runtime variable, then `git rev-parse HEAD`.
fn code_rev() -> String {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string())
}
