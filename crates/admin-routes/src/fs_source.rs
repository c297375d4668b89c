// File: src/fs_source.rs
// Purpose: Discovers route modules by scanning a modules/ directory

use crate::decl::load_module;
use crate::module::Discovery;
use crate::registry::ModuleSource;
use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Default glob for module files, relative to the modules directory
pub const DEFAULT_PATTERN: &str = "**/*.toml";

static DEFAULT_GLOB: Lazy<Pattern> =
    Lazy::new(|| Pattern::new(DEFAULT_PATTERN).expect("default module pattern is valid"));

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// A module file found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFileEntry {
    /// Discovery key, e.g. `./modules/demo/feat.toml`
    pub key: String,
    /// Path relative to the modules directory, `/`-separated
    pub relative: String,
    pub path: PathBuf,
}

/// Loads every module file under a directory, sorted by relative path
///
/// Symlinked files and directories are followed.
#[derive(Debug, Clone)]
pub struct FsModuleSource {
    modules_dir: PathBuf,
    pattern: Pattern,
}

impl FsModuleSource {
    /// Scans `modules_dir` for `**/*.toml`
    pub fn new(modules_dir: impl Into<PathBuf>) -> Self {
        Self {
            modules_dir: modules_dir.into(),
            pattern: DEFAULT_GLOB.clone(),
        }
    }

    /// Scans `modules_dir` for files matching a custom glob
    pub fn with_pattern(modules_dir: impl Into<PathBuf>, pattern: &str) -> Result<Self> {
        let pattern = Pattern::new(pattern)
            .with_context(|| format!("Invalid module pattern: {:?}", pattern))?;
        Ok(Self {
            modules_dir: modules_dir.into(),
            pattern,
        })
    }

    pub fn modules_dir(&self) -> &Path {
        &self.modules_dir
    }

    /// Lists matching module files in discovery order
    pub fn scan(&self) -> Result<Vec<ModuleFileEntry>> {
        if !self.modules_dir.exists() {
            info!(
                "Modules directory {:?} does not exist, no routes discovered",
                self.modules_dir
            );
            return Ok(Vec::new());
        }

        let dir_name = self
            .modules_dir
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("modules");

        let mut entries = Vec::new();
        for entry in WalkDir::new(&self.modules_dir).follow_links(true) {
            let entry = entry
                .with_context(|| format!("Failed to scan modules directory: {:?}", self.modules_dir))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = relative_path(&self.modules_dir, entry.path());
            if !self.pattern.matches_with(&relative, MATCH_OPTIONS) {
                continue;
            }

            entries.push(ModuleFileEntry {
                key: format!("./{}/{}", dir_name, relative),
                relative,
                path: entry.into_path(),
            });
        }

        // Filesystem enumeration order is unspecified
        entries.sort_by(|a, b| a.relative.cmp(&b.relative));
        Ok(entries)
    }
}

impl ModuleSource for FsModuleSource {
    fn discover(&self) -> Result<Discovery> {
        let mut discovery = Discovery::new();

        for entry in self.scan()? {
            let content = fs::read_to_string(&entry.path)
                .with_context(|| format!("Failed to read route module: {:?}", entry.path))?;
            let module = load_module(&entry.key, &content);
            debug!(
                "Discovered route module {} ({} routes)",
                entry.key,
                module.route_count()
            );
            discovery.insert(entry.key, module);
        }

        Ok(discovery)
    }
}

fn relative_path(base: &Path, path: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
