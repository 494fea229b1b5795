use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock};

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn helper_binary(name: &str) -> PathBuf {
    let repo_root = repo_root();
    ensure_helpers_built().expect("failed to build helper binaries");
    let candidates = [
        repo_root.join("target").join("debug").join(name),
        repo_root.join("target").join("release").join(name),
    ];
    for candidate in candidates {
        if candidate.is_file() {
            return candidate;
        }
    }
    panic!("unable to locate helper {name} (checked target/debug, target/release)");
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {cmd:?}"))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Run a command that is expected to fail; returns the raw output for
/// asserting on exit status and stderr.
pub fn run_command_unchecked(mut cmd: Command) -> Result<Output> {
    cmd.output()
        .with_context(|| format!("failed to run command: {cmd:?}"))
}

fn ensure_helpers_built() -> Result<()> {
    static BUILT: AtomicBool = AtomicBool::new(false);
    if BUILT.load(Ordering::SeqCst) {
        return Ok(());
    }

    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let mutex = LOCK.get_or_init(|| Mutex::new(()));
    let _guard = mutex.lock().unwrap_or_else(|err| err.into_inner());

    if BUILT.load(Ordering::SeqCst) {
        return Ok(());
    }

    let status = Command::new("cargo")
        .arg("build")
        .arg("--bins")
        .arg("--quiet")
        .current_dir(repo_root())
        .status()
        .context("failed to compile helper binaries")?;
    if status.success() {
        BUILT.store(true, Ordering::SeqCst);
        Ok(())
    } else {
        bail!("cargo build --bins exited with {status}");
    }
}
