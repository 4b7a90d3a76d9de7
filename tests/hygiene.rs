//! Hygiene: enforces coding standards at test time.
//!
//! Scans the production sources under `src/` (sibling `*_test.rs` files are
//! skipped) for patterns that can crash the calculator or silently drop an
//! error. Every budget is zero and stays zero.

use std::fs;
use std::path::Path;

/// `(pattern, budget, why it matters)`.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on bad input"),
    (".expect(", 0, "panics on bad input"),
    ("panic!(", 0, "crashes the session"),
    ("unreachable!(", 0, "crashes the session"),
    ("todo!(", 0, "unfinished code path"),
    ("unimplemented!(", 0, "unfinished code path"),
    ("let _ =", 0, "discards a result without logging it"),
    (".ok()", 0, "discards an error without logging it"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path.extension().is_none_or(|e| e != "rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(
        files.iter().any(|f| f.path.ends_with("lib.rs")),
        "hygiene scan must run from the crate root"
    );
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("{pattern} ({why}): found {count}, max {budget}\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
