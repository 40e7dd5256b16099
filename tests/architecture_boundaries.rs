use std::fs;
use std::path::{Path, PathBuf};

fn rs_files(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
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
    let rel = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string();
    rel.replace('\\', "/")
}

#[test]
fn only_the_collector_talks_to_sysinfo() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut violations = Vec::new();

    for file in rs_files(&root) {
        let content = fs::read_to_string(&file).unwrap_or_default();
        let rel_path = rel(&file);
        if content.contains("sysinfo::") && rel_path != "src/system/collector.rs" {
            violations.push(format!("{rel_path} uses `sysinfo` outside the collector"));
        }
    }

    assert!(
        violations.is_empty(),
        "Sampler boundary violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn format_module_is_pure() {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/format.rs");
    let content = fs::read_to_string(&file).unwrap_or_default();
    for forbidden in ["crate::system", "crate::shell", "tokio"] {
        assert!(
            !content.contains(forbidden),
            "{} imports forbidden dependency `{}`",
            rel(&file),
            forbidden
        );
    }
}

#[test]
fn engine_has_no_timer_or_event_loop() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/system");
    let mut violations = Vec::new();

    for file in rs_files(&root) {
        let content = fs::read_to_string(&file).unwrap_or_default();
        for forbidden in ["tokio", "std::thread", "crate::event"] {
            if content.contains(forbidden) {
                violations.push(format!(
                    "{} imports forbidden dependency `{}`",
                    rel(&file),
                    forbidden
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Scheduling layering violations:\n{}",
        violations.join("\n")
    );
}
