// Integration tests for the asset assembler against scratch directories.

use site_build::{assemble, copy_tree, BuildConfig, BuildError, CssStep, DEFAULT_MANIFEST};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Sorted (relative path, contents) pairs for every file under `root`.
fn snapshot(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    fn walk(base: &Path, dir: &Path, out: &mut Vec<(PathBuf, Vec<u8>)>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                out.push((path.strip_prefix(base).unwrap().to_path_buf(), Vec::new()));
                walk(base, &path, out);
            } else {
                let rel = path.strip_prefix(base).unwrap().to_path_buf();
                out.push((rel, fs::read(&path).unwrap()));
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

fn config(root: &Path, files: &[&str], css: Option<CssStep>) -> BuildConfig {
    BuildConfig {
        root: root.to_path_buf(),
        files: files.iter().map(|s| s.to_string()).collect(),
        css,
        ..BuildConfig::default()
    }
}

fn sh(script: &str) -> CssStep {
    CssStep {
        program: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string()],
    }
}

#[test]
fn default_config_matches_site_layout() {
    let cfg = BuildConfig::default();
    assert_eq!(cfg.files, DEFAULT_MANIFEST.to_vec());
    assert_eq!(cfg.out_dir, PathBuf::from("public"));
    assert_eq!(cfg.assets_dir, "assets");
    assert_eq!(
        cfg.css.unwrap().command_line(),
        "npx tailwindcss -i ./input.css -o ./public/output.css --minify"
    );
}

#[test]
fn copies_present_files_and_only_warns_on_missing_ones() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(&root.join("index.html"), "<h1>hi</h1>");
    write(&root.join("assets/logo.svg"), "<svg/>");
    write(&root.join("assets/img/hero/bg.png"), "png-bytes");
    write(&root.join("assets/img/icon.png"), "icon-bytes");

    let report = assemble(&config(root, &["index.html", "style.css"], None)).unwrap();

    let out = root.join("public");
    assert_eq!(
        fs::read_to_string(out.join("index.html")).unwrap(),
        "<h1>hi</h1>"
    );
    assert!(!out.join("style.css").exists());
    assert_eq!(report.copied, vec!["index.html".to_string()]);
    assert_eq!(report.missing, vec!["style.css".to_string()]);
    assert_eq!(report.asset_files, Some(3));
    assert!(!report.css_built);

    assert_eq!(snapshot(&root.join("assets")), snapshot(&out.join("assets")));
}

#[test]
fn output_directory_is_recreated_from_scratch() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(&root.join("index.html"), "new");
    write(&root.join("public/stale.txt"), "left over");
    write(&root.join("public/index.html"), "old");

    assemble(&config(root, &["index.html"], None)).unwrap();

    assert!(!root.join("public/stale.txt").exists());
    assert_eq!(
        fs::read_to_string(root.join("public/index.html")).unwrap(),
        "new"
    );
}

#[test]
fn missing_assets_directory_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(&root.join("index.html"), "x");

    let report = assemble(&config(root, &["index.html"], None)).unwrap();
    assert_eq!(report.asset_files, None);
    assert!(!root.join("public/assets").exists());
}

#[test]
fn copy_tree_counts_nested_files() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    let dest = dir.path().join("dest");
    write(&src.join("a.txt"), "a");
    write(&src.join("b/c.txt"), "c");
    write(&src.join("b/d/e.txt"), "e");
    fs::create_dir_all(src.join("empty")).unwrap();
    fs::create_dir(&dest).unwrap();

    assert_eq!(copy_tree(&src, &dest).unwrap(), 3);
    assert!(dest.join("empty").is_dir());
    assert_eq!(snapshot(&src), snapshot(&dest));
}

#[cfg(unix)]
#[test]
fn css_step_runs_from_project_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(&root.join("index.html"), "x");

    let css = sh("printf 'body{}' > ./public/output.css");
    let report = assemble(&config(root, &["index.html"], Some(css))).unwrap();

    assert!(report.css_built);
    assert_eq!(
        fs::read_to_string(root.join("public/output.css")).unwrap(),
        "body{}"
    );
}

#[cfg(unix)]
#[test]
fn failing_css_step_is_fatal_and_keeps_partial_output() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(&root.join("index.html"), "x");
    write(&root.join("assets/a.txt"), "a");

    let err = assemble(&config(root, &["index.html"], Some(sh("exit 3")))).unwrap_err();
    match err {
        BuildError::CssFailed { status, command } => {
            assert_eq!(status.code(), Some(3));
            assert_eq!(command, "sh -c exit 3");
        }
        other => panic!("unexpected error: {other}"),
    }
    // No rollback.
    assert!(root.join("public/index.html").exists());
    assert!(root.join("public/assets/a.txt").exists());
}

#[test]
fn unknown_css_tool_is_a_spawn_error() {
    let dir = tempfile::tempdir().unwrap();
    let css = CssStep {
        program: "definitely-not-a-css-tool-4f1c".to_string(),
        args: vec![],
    };
    let err = assemble(&config(dir.path(), &[], Some(css))).unwrap_err();
    assert!(matches!(err, BuildError::CssSpawn { .. }), "{err}");
}

fn run_cli(root: &Path, css_args: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_site-build"));
    cmd.env("RUST_LOG", "info")
        .arg("--root")
        .arg(root)
        .arg("--file")
        .arg("index.html")
        .arg("--css-program")
        .arg("sh");
    for a in css_args {
        cmd.arg(format!("--css-arg={a}"));
    }
    cmd.output().unwrap()
}

#[cfg(unix)]
#[test]
fn cli_exits_non_zero_without_completion_message_when_css_fails() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("index.html"), "x");

    let output = run_cli(dir.path(), &["-c", "exit 1"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(!stderr.contains("Build completed"), "{stderr}");
    assert!(stderr.contains("CSS build"), "{stderr}");
}

#[cfg(unix)]
#[test]
fn cli_reports_completion_on_success() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir.path().join("index.html"), "x");

    let output = run_cli(dir.path(), &["-c", "true"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "{stderr}");
    assert!(stderr.contains("Build completed"), "{stderr}");
    assert!(stderr.contains("assets directory not found"), "{stderr}");
    assert!(dir.path().join("public/index.html").exists());
}

#[test]
fn absolute_manifest_entry_is_rejected_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("site");
    let outside = dir.path().join("elsewhere.html");
    write(&root.join("index.html"), "x");
    write(&outside, "precious contents");

    let entry = outside.display().to_string();
    let err = assemble(&config(&root, &["index.html", entry.as_str()], None)).unwrap_err();

    assert!(
        matches!(&err, BuildError::UnsafeManifestEntry { entry: e } if *e == entry),
        "{err}"
    );
    assert_eq!(fs::read_to_string(&outside).unwrap(), "precious contents");
    // Rejected before the output directory is touched.
    assert!(!root.join("public").exists());
}

#[test]
fn parent_dir_manifest_entry_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("site");
    write(&root.join("index.html"), "x");
    write(&dir.path().join("secret.txt"), "s");

    for entry in ["../secret.txt", "sub/../../secret.txt", ""] {
        let err = assemble(&config(&root, &[entry], None)).unwrap_err();
        assert!(
            matches!(err, BuildError::UnsafeManifestEntry { .. }),
            "{entry}: {err}"
        );
    }
    assert!(!root.join("public").exists());
}

#[test]
fn nested_relative_manifest_entry_is_allowed() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(&root.join("pkg/site_web.js"), "js");

    let report = assemble(&config(root, &["./pkg/site_web.js"], None)).unwrap();
    assert_eq!(report.copied.len(), 1);
    assert_eq!(
        fs::read_to_string(root.join("public/pkg/site_web.js")).unwrap(),
        "js"
    );
}

fn with_out(root: &Path, out: &str) -> BuildConfig {
    BuildConfig {
        out_dir: PathBuf::from(out),
        ..config(root, &["index.html"], None)
    }
}

#[test]
fn output_equal_to_or_containing_root_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("site");
    write(&root.join("index.html"), "keep me");

    for out in [".", "", "..", "public/.."] {
        let err = assemble(&with_out(&root, out)).unwrap_err();
        assert!(
            matches!(err, BuildError::OutDirOverlap { what: "the project root", .. }),
            "{out:?}: {err}"
        );
    }
    let abs = dir.path().display().to_string();
    assert!(matches!(
        assemble(&with_out(&root, &abs)).unwrap_err(),
        BuildError::OutDirOverlap { .. }
    ));

    assert_eq!(
        fs::read_to_string(root.join("index.html")).unwrap(),
        "keep me"
    );
}

#[test]
fn output_overlapping_assets_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(&root.join("index.html"), "x");
    write(&root.join("assets/logo.svg"), "<svg/>");

    for out in ["assets", "assets/public", "./assets/nested/out"] {
        let err = assemble(&with_out(root, out)).unwrap_err();
        assert!(
            matches!(err, BuildError::OutDirOverlap { what: "the assets directory", .. }),
            "{out}: {err}"
        );
    }
    assert_eq!(
        fs::read_to_string(root.join("assets/logo.svg")).unwrap(),
        "<svg/>"
    );
}

#[test]
fn absolute_output_outside_root_is_allowed() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("site");
    let out = dir.path().join("dist");
    write(&root.join("index.html"), "x");

    let cfg = with_out(&root, &out.display().to_string());
    assemble(&cfg).unwrap();
    assert!(out.join("index.html").is_file());
}
