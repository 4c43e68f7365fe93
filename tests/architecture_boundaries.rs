use std::fs;
use std::path::{Path, PathBuf};

fn rs_files(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
                out.push(path);
            }
        }
    }
    out.sort();
    out
}

fn rel(path: &Path) -> String {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn violations_in(files: &[PathBuf], forbidden: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();
    for file in files {
        let content = fs::read_to_string(file).unwrap_or_default();
        for needle in forbidden {
            if content.contains(needle) {
                violations.push(format!("{} mentions `{}`", rel(file), needle));
            }
        }
    }
    violations
}

#[test]
fn table_model_is_pure() {
    let table = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/table.rs");
    let violations = violations_in(&[table], &["crate::ui", "ratatui", "crossterm", "sysinfo"]);
    assert!(
        violations.is_empty(),
        "Table model layering violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn ui_does_not_reach_into_platform_code() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/ui");
    let violations = violations_in(
        &rs_files(&root),
        &["crate::system::platform", "crate::system::collector", "sysinfo"],
    );
    assert!(
        violations.is_empty(),
        "UI/platform boundary violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn sampler_only_sees_collaborator_traits() {
    let sampler = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/system/sampler.rs");
    let violations = violations_in(&[sampler], &["sysinfo", "platform::", "collector::"]);
    assert!(
        violations.is_empty(),
        "Sampler depends on a concrete source:\n{}",
        violations.join("\n")
    );
}

#[test]
fn target_os_cfg_is_scoped_to_system_platform() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let violations: Vec<String> = rs_files(&root)
        .iter()
        .filter(|file| {
            fs::read_to_string(file)
                .unwrap_or_default()
                .contains("target_os")
        })
        .map(|file| rel(file))
        .filter(|path| !path.starts_with("src/system/platform/"))
        .map(|path| format!("{path} contains `target_os` cfg outside src/system/platform/"))
        .collect();

    assert!(
        violations.is_empty(),
        "Unexpected target_os cfg usage:\n{}",
        violations.join("\n")
    );
}
