use crate::git::GitRepo;
use crate::graph::{render_graph, AnsiCells, DayBucket, GraphConfig};
use crate::model::{DayCount, StatsOutput, SCHEMA_VERSION};
use crate::store::RepoStore;
use anyhow::Context;
use chrono::Utc;
use std::io;
use std::path::Path;

/// Aggregate `email`'s commits across every stored repository and draw the
/// contribution graph, or dump the day buckets as JSON.
pub fn exec(repos_file: Option<&Path>, email: &str, json: bool) -> anyhow::Result<()> {
    let store = RepoStore::open(repos_file)?;
    let paths = store.read().context("Failed to read repository list")?;

    let now = Utc::now();
    let mut bucket = DayBucket::new(GraphConfig::SIX_MONTHS);
    for path in &paths {
        let repo = GitRepo::open(path)
            .with_context(|| format!("Failed to open repository {}", path.display()))?;
        let commits = repo
            .collect_commits()
            .with_context(|| format!("Failed to read history of {}", path.display()))?;
        bucket.add_commits(email, &commits, now);
    }

    if json {
        output_json(&bucket, email)?;
    } else {
        let mut stdout = io::stdout().lock();
        render_graph(&bucket, now, &AnsiCells, &mut stdout)
            .context("Failed to draw the graph")?;
    }
    Ok(())
}

fn output_json(bucket: &DayBucket, email: &str) -> anyhow::Result<()> {
    let days = bucket
        .keys_sorted()
        .into_iter()
        .map(|days_ago| DayCount {
            days_ago,
            count: bucket.get(days_ago),
        })
        .collect();

    let output = StatsOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        email: email.to_string(),
        days,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
