//! Hygiene — source-level rules checked at test time.
//!
//! Production sources (everything under `src/` except `*_test.rs`) are scanned
//! line by line. Each pattern has a budget that never grows: the behaviors
//! treat missing elements as no-ops and binding failures as logged errors, so
//! nothing in production should panic or drop a `Result` on the floor.
//!
//! A second rule keeps browser types out of the core: only the binding and the
//! clock may name `web_sys`, `js_sys` or `wasm_bindgen`.

use std::fs;
use std::path::{Path, PathBuf};

/// (pattern, budget, why it is banned)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics"),
    (".expect(", 0, "panics"),
    ("panic!(", 0, "panics"),
    ("unreachable!(", 0, "panics"),
    ("todo!(", 0, "stub"),
    ("unimplemented!(", 0, "stub"),
    ("let _ =", 0, "silently discards a result"),
    (".ok()", 0, "silently discards an error"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

/// Files allowed to reference browser bindings.
const BROWSER_FILES: &[&str] = &["web.rs", "clock.rs"];
const BROWSER_CRATES: &[&str] = &["web_sys", "js_sys", "wasm_bindgen", "gloo_timers"];

struct SourceFile {
    path: PathBuf,
    content: String,
}

fn production_sources() -> Vec<SourceFile> {
    let mut out = Vec::new();
    walk(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut out);
    out
}

fn walk(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|ext| ext == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(n, _)| format!("  {}:{}", file.path.display(), n + 1))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = production_sources();
    assert!(files.iter().any(|f| f.path.ends_with("page.rs")), "scanner found no sources");
}

#[test]
fn pattern_budgets() {
    let files = production_sources();
    let mut failures = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let found = hits(&files, pattern);
        if found.len() > *budget {
            failures.push(format!(
                "`{pattern}` ({why}): found {}, max {budget}\n{}",
                found.len(),
                found.join("\n")
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn core_stays_browser_free() {
    let offenders: Vec<String> = production_sources()
        .into_iter()
        .filter(|file| {
            let name = file.path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
            !BROWSER_FILES.contains(&name.as_str())
        })
        .filter(|file| BROWSER_CRATES.iter().any(|krate| file.content.contains(krate)))
        .map(|file| file.path.display().to_string())
        .collect();
    assert!(offenders.is_empty(), "browser crates referenced outside the binding:\n{}", offenders.join("\n"));
}
