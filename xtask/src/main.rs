use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

const PACKAGE: &str = "claim-alert-extension";
const WASM_TARGET: &str = "wasm32-unknown-unknown";
const STATIC_DIR: &str = "extension/static";
const DIST_DIR: &str = "dist";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Claim alert extension task runner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the unpacked extension into dist/
    Build {
        /// Optimized build
        #[arg(short, long)]
        release: bool,
    },

    /// Run tests
    Test {
        #[command(subcommand)]
        test_type: Option<TestType>,
    },

    /// Run clippy linter
    Clippy,

    /// Remove dist/
    Clean,
}

#[derive(Subcommand)]
enum TestType {
    /// Panel logic without Dioxus (state, router, formatting, bridge)
    Core,

    /// Run all Rust tests
    Unit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { release } => build(release),
        Commands::Test { test_type } => test(test_type),
        Commands::Clippy => clippy(),
        Commands::Clean => clean(),
    }
}

/// Cargo invocations for `build`, in order, with a progress label each.
/// Worker binaries come first: building them re-emits the lib's cdylib
/// without the `panel` feature, so the panel lib must be built last.
fn cargo_build_steps(release: bool) -> Vec<(&'static str, Vec<&'static str>)> {
    let mut cargo_args = vec!["build", "-p", PACKAGE, "--target", WASM_TARGET];
    if release {
        cargo_args.push("--release");
    }

    let mut bin_args = cargo_args.clone();
    bin_args.extend(["--bins", "--no-default-features"]);

    let mut panel_args = cargo_args;
    panel_args.push("--lib");

    vec![
        ("background worker and content script", bin_args),
        ("panel (Dioxus)", panel_args),
    ]
}

fn build(release: bool) -> Result<()> {
    let profile = if release { "release" } else { "debug" };

    for (label, args) in cargo_build_steps(release) {
        println!("🔨 Building {}...", label);
        run_cmd("cargo", &args)?;
    }

    let out_dir = format!("target/{}/{}", WASM_TARGET, profile);
    let pkg_dir = format!("{}/pkg", DIST_DIR);

    println!("📦 Generating bindings...");
    bindgen(&format!("{}/claim_alert_extension.wasm", out_dir), "web", &pkg_dir, "panel")?;
    // Service workers and content scripts cannot load ES modules
    bindgen(&format!("{}/background.wasm", out_dir), "no-modules", &pkg_dir, "background")?;
    bindgen(&format!("{}/content.wasm", out_dir), "no-modules", &pkg_dir, "content")?;

    println!("📁 Copying static assets...");
    copy_dir(Path::new(STATIC_DIR), Path::new(DIST_DIR))?;

    println!("✅ Extension ready in {}/ (load it unpacked)", DIST_DIR);
    Ok(())
}

fn bindgen(wasm: &str, target: &str, out_dir: &str, out_name: &str) -> Result<()> {
    run_cmd(
        "wasm-bindgen",
        &[
            wasm,
            "--target",
            target,
            "--out-dir",
            out_dir,
            "--out-name",
            out_name,
            "--no-typescript",
        ],
    )
}

fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    fs::create_dir_all(to).with_context(|| format!("Failed to create {}", to.display()))?;

    for entry in fs::read_dir(from).with_context(|| format!("Failed to read {}", from.display()))? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        }
    }
    Ok(())
}

fn test(test_type: Option<TestType>) -> Result<()> {
    match test_type {
        Some(TestType::Core) => {
            println!("🧪 Testing panel logic without Dioxus...");
            run_cmd("cargo", &["test", "-p", PACKAGE, "--no-default-features"])?;
        }
        Some(TestType::Unit) | None => {
            println!("🧪 Running all tests...");
            run_cmd("cargo", &["test", "--workspace"])?;
        }
    }
    Ok(())
}

fn clippy() -> Result<()> {
    println!("🔍 Running clippy on workspace (warnings as errors)...");
    run_cmd(
        "cargo",
        &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ],
    )?;
    Ok(())
}

fn clean() -> Result<()> {
    println!("🧹 Removing {}/...", DIST_DIR);
    // Ignore error if nothing was built yet
    let _ = fs::remove_dir_all(DIST_DIR);
    Ok(())
}

fn run_cmd(program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to run: {} {}", program, args.join(" ")))?;

    if !status.success() {
        anyhow::bail!("Command failed: {} {}", program, args.join(" "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_lib_is_built_last() {
        for release in [false, true] {
            let steps = cargo_build_steps(release);
            let (_, last) = steps.last().unwrap();
            assert!(last.contains(&"--lib"));
            assert!(!last.contains(&"--no-default-features"));
            assert_eq!(last.contains(&"--release"), release);
        }
    }

    #[test]
    fn test_worker_bins_build_without_panel_feature() {
        let steps = cargo_build_steps(false);
        let (_, bins) = &steps[0];
        assert!(bins.contains(&"--bins"));
        assert!(bins.contains(&"--no-default-features"));
        assert!(!bins.contains(&"--lib"));
    }
}
