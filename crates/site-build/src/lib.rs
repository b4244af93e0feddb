//! Assembles the deployable site directory.
//!
//! A build is four steps, always in this order: recreate the output
//! directory, copy the top-level manifest, mirror the assets tree, run the
//! CSS tool. Missing inputs are warnings; a failing CSS tool is fatal. A
//! failed build leaves whatever was already copied in place.
//!
//! The layout is checked before anything is touched: manifest entries must
//! stay inside the root, and the output directory may not overlap the root or
//! the assets tree, since it is wiped on every build.

use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;

pub const DEFAULT_MANIFEST: [&str; 3] = ["index.html", "style.css", "script.js"];
pub const DEFAULT_OUT_DIR: &str = "public";
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_CSS_INPUT: &str = "./input.css";
pub const CSS_OUTPUT_FILE: &str = "output.css";

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("manifest entry `{entry}` must be a relative path inside the project root")]
    UnsafeManifestEntry { entry: String },

    #[error("output directory {} overlaps {what} {}", .out.display(), .other.display())]
    OutDirOverlap {
        out: PathBuf,
        what: &'static str,
        other: PathBuf,
    },

    #[error("CSS tool `{program}` could not be started: {source}")]
    CssSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("CSS build `{command}` failed ({status})")]
    CssFailed { command: String, status: ExitStatus },
}

fn io_err<'a>(
    action: &'static str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> BuildError + 'a {
    move |source| BuildError::Io {
        action,
        path: path.to_path_buf(),
        source,
    }
}

/// External stylesheet generator, run from the project root.
#[derive(Clone, Debug, PartialEq)]
pub struct CssStep {
    pub program: String,
    pub args: Vec<String>,
}

impl CssStep {
    /// `npx tailwindcss -i <input> -o <output> --minify`
    pub fn tailwind(input: &str, output: &str) -> Self {
        Self {
            program: "npx".to_string(),
            args: ["tailwindcss", "-i", input, "-o", output, "--minify"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn run(&self, cwd: &Path) -> Result<(), BuildError> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(cwd)
            .status()
            .map_err(|source| BuildError::CssSpawn {
                program: self.program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(BuildError::CssFailed {
                command: self.command_line(),
                status,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Project root; manifest, assets and the CSS step are resolved here.
    pub root: PathBuf,
    /// Output directory, relative to `root` unless absolute.
    pub out_dir: PathBuf,
    pub files: Vec<String>,
    pub assets_dir: String,
    /// `None` skips the stylesheet step.
    pub css: Option<CssStep>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        let out_dir = PathBuf::from(DEFAULT_OUT_DIR);
        let css_out = format!("./{}/{}", DEFAULT_OUT_DIR, CSS_OUTPUT_FILE);
        Self {
            root: PathBuf::from("."),
            out_dir,
            files: DEFAULT_MANIFEST.iter().map(|s| s.to_string()).collect(),
            assets_dir: DEFAULT_ASSETS_DIR.to_string(),
            css: Some(CssStep::tailwind(DEFAULT_CSS_INPUT, &css_out)),
        }
    }
}

impl BuildConfig {
    pub fn out_path(&self) -> PathBuf {
        self.root.join(&self.out_dir)
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct BuildReport {
    pub copied: Vec<String>,
    pub missing: Vec<String>,
    /// Number of files mirrored from the assets tree; `None` if it was absent.
    pub asset_files: Option<usize>,
    pub css_built: bool,
}

pub fn assemble(cfg: &BuildConfig) -> Result<BuildReport, BuildError> {
    validate_layout(cfg)?;
    let out = cfg.out_path();
    let mut report = BuildReport::default();

    prepare_out_dir(&out)?;
    copy_manifest(&cfg.root, &out, &cfg.files, &mut report)?;

    let assets_src = cfg.root.join(&cfg.assets_dir);
    if assets_src.is_dir() {
        let assets_dest = out.join(&cfg.assets_dir);
        fs::create_dir_all(&assets_dest).map_err(io_err("create", &assets_dest))?;
        let n = copy_tree(&assets_src, &assets_dest)?;
        info!(
            "Copied {} directory to {} ({} files)",
            cfg.assets_dir,
            assets_dest.display(),
            n
        );
        report.asset_files = Some(n);
    } else {
        warn!("Warning: {} directory not found.", cfg.assets_dir);
    }

    match &cfg.css {
        Some(css) => {
            info!("Building CSS: {}", css.command_line());
            css.run(&cfg.root)?;
            info!("CSS built successfully.");
            report.css_built = true;
        }
        None => info!("CSS step skipped"),
    }

    info!(
        "Build completed! \"{}\" directory is ready for deployment.",
        cfg.out_dir.display()
    );
    Ok(report)
}

/// Reject layouts that would copy outside the output directory or let the
/// output wipe its own inputs.
pub fn validate_layout(cfg: &BuildConfig) -> Result<(), BuildError> {
    if let Some(entry) = cfg.files.iter().find(|f| !is_contained(Path::new(f))) {
        return Err(BuildError::UnsafeManifestEntry {
            entry: entry.clone(),
        });
    }

    let root = resolve(&cfg.root).map_err(io_err("resolve", &cfg.root))?;
    let out_path = cfg.out_path();
    let out = resolve(&out_path).map_err(io_err("resolve", &out_path))?;
    if root.starts_with(&out) {
        return Err(BuildError::OutDirOverlap {
            out,
            what: "the project root",
            other: root,
        });
    }

    let assets_path = cfg.root.join(&cfg.assets_dir);
    if !assets_path.is_dir() {
        return Ok(());
    }
    let assets = resolve(&assets_path).map_err(io_err("resolve", &assets_path))?;
    if out.starts_with(&assets) || assets.starts_with(&out) {
        return Err(BuildError::OutDirOverlap {
            out,
            what: "the assets directory",
            other: assets,
        });
    }
    Ok(())
}

/// Relative, and made only of plain names (`.` allowed).
fn is_contained(path: &Path) -> bool {
    path.components().next().is_some()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Absolute, `.`/`..`-free form of `path`. Dot components are folded
/// lexically, then the longest existing ancestor is canonicalized so
/// symlinked prefixes compare equal.
fn resolve(path: &Path) -> io::Result<PathBuf> {
    let mut lexical = PathBuf::new();
    for c in std::env::current_dir()?.join(path).components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir => {
                lexical.pop();
            }
            other => lexical.push(other.as_os_str()),
        }
    }

    let mut base = lexical.as_path();
    let mut tail = Vec::new();
    loop {
        if let Ok(real) = base.canonicalize() {
            return Ok(tail.into_iter().rev().fold(real, |p, name| p.join(name)));
        }
        match (base.file_name(), base.parent()) {
            (Some(name), Some(parent)) => {
                tail.push(name);
                base = parent;
            }
            _ => return Ok(lexical.clone()),
        }
    }
}

/// Remove `out` if present and create it empty.
pub fn prepare_out_dir(out: &Path) -> Result<(), BuildError> {
    if out.exists() {
        fs::remove_dir_all(out).map_err(io_err("remove", out))?;
    }
    fs::create_dir_all(out).map_err(io_err("create", out))
}

fn copy_manifest(
    root: &Path,
    out: &Path,
    files: &[String],
    report: &mut BuildReport,
) -> Result<(), BuildError> {
    for file in files {
        let src = root.join(file);
        if !src.is_file() {
            warn!("Warning: {} not found.", file);
            report.missing.push(file.clone());
            continue;
        }
        let dest = out.join(file);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(io_err("create", parent))?;
        }
        fs::copy(&src, &dest).map_err(io_err("copy", &src))?;
        info!("Copied {} to {}", file, out.display());
        report.copied.push(file.clone());
    }
    Ok(())
}

/// Mirror `src` into the existing directory `dest`. Returns the number of
/// regular files copied.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<usize, BuildError> {
    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(io_err("read", src))? {
        let entry = entry.map_err(io_err("read", src))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        let kind = entry.file_type().map_err(io_err("stat", &from))?;
        if kind.is_dir() {
            fs::create_dir(&to).map_err(io_err("create", &to))?;
            copied += copy_tree(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(io_err("copy", &from))?;
            copied += 1;
        }
    }
    Ok(copied)
}
