use crate::error::{Result, StreakError};
use std::fs;
use std::path::{Path, PathBuf};

/// The list of repositories the stats command aggregates over, kept as one
/// absolute path per line in a dotfile.
pub struct RepoStore {
    path: PathBuf,
}

impl RepoStore {
    /// Use `path` when given, otherwise the `.gitstreak` dotfile in the home
    /// directory.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => dirs::home_dir()
                .ok_or_else(|| StreakError::Store("Could not determine home directory".to_string()))?
                .join(".gitstreak"),
        };
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored repository paths; an absent file reads as an empty list.
    pub fn read(&self) -> Result<Vec<PathBuf>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(PathBuf::from)
            .collect())
    }

    /// Merge `new_paths` into the stored list, keeping existing order and
    /// skipping paths already present. Returns how many were added.
    pub fn merge(&self, new_paths: &[PathBuf]) -> Result<usize> {
        let mut paths = self.read()?;
        let mut added = 0;
        for path in new_paths {
            if !paths.contains(path) {
                paths.push(path.clone());
                added += 1;
            }
        }

        let mut contents = String::new();
        for path in &paths {
            contents.push_str(&path.to_string_lossy());
            contents.push('\n');
        }
        fs::write(&self.path, contents)?;
        Ok(added)
    }
}
