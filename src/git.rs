use crate::error::{Result, StreakError};
use crate::model::CommitMeta;
use chrono::DateTime;
use gix::{discover, ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = discover(path.as_ref())?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walk every commit reachable from HEAD, de-duplicated across merge
    /// ancestry, and return the author email and timestamp of each.
    pub fn collect_commits(&self) -> Result<Vec<CommitMeta>> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let mut commits = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Reading {}", self.path.display()));

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let secs = commit.time()?.seconds;
            let timestamp = DateTime::from_timestamp(secs, 0)
                .ok_or_else(|| StreakError::InvalidDate(format!("Invalid timestamp: {secs}")))?;
            let author = commit.author()?;

            commits.push(CommitMeta {
                email: author.email.to_string(),
                timestamp,
            });

            for pid in commit.parent_ids() {
                stack.push_back(pid.into());
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(commits)
    }
}
