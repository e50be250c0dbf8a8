//! Test fixtures and builders

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch tree of bin directories with automatic cleanup
pub struct TestBinDirs {
    pub temp_dir: TempDir,
}

impl TestBinDirs {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Creates (if needed) the directory `name` and returns it as a PATH entry
    pub fn dir(&self, name: &str) -> Result<String> {
        let path = self.root().join(name);
        fs::create_dir_all(&path)?;
        Ok(path.to_string_lossy().into_owned())
    }

    /// Path of a directory that is never created
    pub fn missing_dir(&self, name: &str) -> String {
        self.root().join(name).to_string_lossy().into_owned()
    }

    /// Creates an executable script `command` inside directory `name`
    pub fn add_executable(&self, name: &str, command: &str) -> Result<PathBuf> {
        let file = self.write_script(name, command)?;
        set_mode(&file, 0o755)?;
        Ok(file)
    }

    /// Creates a file called `command` that is not executable
    pub fn add_plain_file(&self, name: &str, command: &str) -> Result<PathBuf> {
        let file = self.write_script(name, command)?;
        set_mode(&file, 0o644)?;
        Ok(file)
    }

    fn write_script(&self, name: &str, command: &str) -> Result<PathBuf> {
        let dir = self.dir(name)?;
        let file = Path::new(&dir).join(command);
        fs::write(&file, "#!/bin/sh\nexit 0\n")?;
        Ok(file)
    }
}

#[cfg(unix)]
fn set_mode(file: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(file, fs::Permissions::from_mode(mode))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_mode(_file: &Path, _mode: u32) -> Result<()> {
    Ok(())
}

/// True if both paths point at the same file once symlinks are resolved
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
