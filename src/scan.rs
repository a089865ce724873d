use crate::error::Result;
use crate::store::RepoStore;
use anyhow::Context;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

pub fn exec(repos_file: Option<&Path>, folders: &[PathBuf]) -> anyhow::Result<()> {
    let store = RepoStore::open(repos_file)?;

    let mut found = Vec::new();
    for folder in folders {
        found.extend(
            find_repositories(folder)
                .with_context(|| format!("Failed to scan {}", folder.display()))?,
        );
    }

    let added = store.merge(&found).context("Failed to update repository list")?;
    println!(
        "Added {added} new repositories to {}",
        store.path().display()
    );
    Ok(())
}

/// Recursively find git repositories under `folder` by looking for `.git`
/// directories. Dependency folders are skipped, and the walk never descends
/// into `.git` itself, though nested repositories below a worktree are still
/// picked up.
pub fn find_repositories(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut repos = Vec::new();

    let walker = WalkBuilder::new(folder)
        .hidden(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            name != ".git" && name != "node_modules" && name != "vendor"
        })
        .build();

    for entry in walker {
        let entry = entry?;
        let is_dir = entry.file_type().map_or(false, |t| t.is_dir());
        if is_dir && entry.path().join(".git").is_dir() {
            repos.push(entry.path().to_path_buf());
        }
    }

    Ok(repos)
}
