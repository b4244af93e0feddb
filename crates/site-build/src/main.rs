use anyhow::{Context, Result};
use clap::Parser;
use site_build::{
    assemble, BuildConfig, CssStep, CSS_OUTPUT_FILE, DEFAULT_ASSETS_DIR, DEFAULT_CSS_INPUT,
    DEFAULT_MANIFEST, DEFAULT_OUT_DIR,
};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "site-build")]
#[command(about = "Assemble the deployable site directory")]
struct Cli {
    /// Project root containing the manifest files and assets
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Output directory, relative to the root unless absolute
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    out: PathBuf,

    /// Top-level file to copy (repeatable)
    #[arg(long = "file", default_values = DEFAULT_MANIFEST)]
    files: Vec<String>,

    /// Assets directory mirrored into the output
    #[arg(long, default_value = DEFAULT_ASSETS_DIR)]
    assets: String,

    /// CSS tool to run after copying
    #[arg(long, default_value = "npx")]
    css_program: String,

    /// Argument for the CSS tool (repeatable). Without any, a minified
    /// Tailwind build from ./input.css into <out>/output.css is used.
    #[arg(long = "css-arg", allow_hyphen_values = true)]
    css_args: Vec<String>,

    /// Skip the CSS step entirely
    #[arg(long)]
    skip_css: bool,
}

impl Cli {
    fn into_config(self) -> BuildConfig {
        let css = if self.skip_css {
            None
        } else if self.css_args.is_empty() {
            let output = css_output_path(&self.out);
            let mut step = CssStep::tailwind(DEFAULT_CSS_INPUT, &output);
            step.program = self.css_program;
            Some(step)
        } else {
            Some(CssStep {
                program: self.css_program,
                args: self.css_args,
            })
        };
        BuildConfig {
            root: self.root,
            out_dir: self.out,
            files: self.files,
            assets_dir: self.assets,
            css,
        }
    }
}

fn css_output_path(out: &Path) -> String {
    if out.is_absolute() {
        out.join(CSS_OUTPUT_FILE).display().to_string()
    } else {
        format!("./{}/{}", out.display(), CSS_OUTPUT_FILE)
    }
}

fn run(cfg: &BuildConfig) -> Result<()> {
    let report = assemble(cfg).context("site build failed")?;
    if !report.missing.is_empty() {
        log::warn!(
            "{} manifest file(s) missing: {}",
            report.missing.len(),
            report.missing.join(", ")
        );
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cfg = Cli::parse().into_config();
    if let Err(e) = run(&cfg) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
