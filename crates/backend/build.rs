//! Places the workspace `config.toml` next to the backend binary, where
//! `shared::config::load_config` looks for it first.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

const CONFIG_FILE: &str = "config.toml";

fn main() {
    println!("cargo:rerun-if-changed=../../{}", CONFIG_FILE);

    match install_config() {
        Ok(Some(_)) => {}
        Ok(None) => println!(
            "cargo:warning={} not found in workspace root, binary will use the embedded default",
            CONFIG_FILE
        ),
        Err(e) => println!("cargo:warning=could not install {}: {}", CONFIG_FILE, e),
    }
}

/// Copies the config into the profile dir. `Ok(None)` when the workspace has none.
fn install_config() -> io::Result<Option<PathBuf>> {
    let manifest_dir = PathBuf::from(env_var("CARGO_MANIFEST_DIR")?);
    let Some(workspace) = manifest_dir.ancestors().nth(2) else {
        return Err(not_found("workspace root"));
    };
    let source = workspace.join(CONFIG_FILE);
    if !source.is_file() {
        return Ok(None);
    }

    let bin_dir = profile_dir(Path::new(&env_var("OUT_DIR")?), &env_var("PROFILE")?)?;
    let dest = bin_dir.join(CONFIG_FILE);

    let contents = fs::read(&source)?;
    if fs::read(&dest).ok().as_deref() != Some(contents.as_slice()) {
        fs::write(&dest, contents)?;
    }
    Ok(Some(dest))
}

/// `OUT_DIR` is `<target>/<profile>/build/backend-<hash>/out`.
fn profile_dir(out_dir: &Path, profile: &str) -> io::Result<PathBuf> {
    out_dir
        .ancestors()
        .find(|p| p.file_name().is_some_and(|name| name == profile))
        .map(Path::to_path_buf)
        .ok_or_else(|| not_found("target profile directory"))
}

fn env_var(name: &str) -> io::Result<String> {
    env::var(name).map_err(|e| io::Error::new(io::ErrorKind::NotFound, format!("{}: {}", name, e)))
}

fn not_found(what: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("{} not found", what))
}
