use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use warplog_domain::{PlayerId, PullId, PullRecord, PullRepository};

use crate::utils::staging_path;

/// One JSON array per player under `<data_dir>/pulls/`, kept sorted by id.
/// Files are replaced through a staged write and rename so readers never see
/// a partial file.
pub struct JsonPullStore {
    pulls_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonPullStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            pulls_dir: data_dir.as_ref().join("pulls"),
            write_lock: Mutex::new(()),
        }
    }

    fn player_path(&self, player_id: &PlayerId) -> PathBuf {
        self.pulls_dir.join(format!("{}.json", player_id.as_str()))
    }

    async fn read_player(&self, path: &Path) -> anyhow::Result<Vec<PullRecord>> {
        if !fs::try_exists(path).await? {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        let pulls: Vec<PullRecord> = serde_json::from_str(&content)
            .with_context(|| format!("decoding {}", path.display()))?;
        Ok(pulls)
    }
}

#[async_trait]
impl PullRepository for JsonPullStore {
    async fn get_all_pulls(&self, player_id: &PlayerId) -> anyhow::Result<Vec<PullRecord>> {
        let mut pulls = self.read_player(&self.player_path(player_id)).await?;
        let mut seen: HashSet<PullId> = HashSet::with_capacity(pulls.len());
        pulls.retain(|pull| seen.insert(pull.id));
        Ok(pulls)
    }

    async fn append_pulls(&self, player_id: &PlayerId, pulls: &[PullRecord]) -> anyhow::Result<usize> {
        let _guard = self.write_lock.lock().await;
        let path = self.player_path(player_id);
        let mut stored = self.read_player(&path).await?;
        let mut seen: HashSet<PullId> = stored.iter().map(|pull| pull.id).collect();
        let before = stored.len();
        stored.extend(pulls.iter().filter(|pull| seen.insert(pull.id)).cloned());
        let written = stored.len() - before;
        if written == 0 {
            return Ok(0);
        }
        stored.sort_by_key(|pull| pull.id);

        fs::create_dir_all(&self.pulls_dir).await?;
        let staged = staging_path(&path);
        fs::write(&staged, serde_json::to_vec(&stored)?)
            .await
            .with_context(|| format!("writing {}", staged.display()))?;
        if let Err(err) = fs::rename(&staged, &path).await {
            fs::remove_file(&staged).await.ok();
            return Err(err).with_context(|| format!("replacing {}", path.display()));
        }
        debug!("stored {} new pulls for {} ({} total)", written, player_id, stored.len());
        Ok(written)
    }

    async fn list_players(&self) -> anyhow::Result<Vec<PlayerId>> {
        if !fs::try_exists(&self.pulls_dir).await? {
            return Ok(Vec::new());
        }
        let mut players = Vec::new();
        let mut entries = fs::read_dir(&self.pulls_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            match PlayerId::parse(stem) {
                Ok(player_id) => players.push(player_id),
                Err(err) => warn!("ignoring {}: {}", path.display(), err),
            }
        }
        players.sort();
        Ok(players)
    }

    async fn delete_player(&self, player_id: &PlayerId) -> anyhow::Result<bool> {
        let _guard = self.write_lock.lock().await;
        let path = self.player_path(player_id);
        if !fs::try_exists(&path).await? {
            return Ok(false);
        }
        fs::remove_file(&path)
            .await
            .with_context(|| format!("removing {}", path.display()))?;
        debug!("removed history of {}", player_id);
        Ok(true)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.pulls_dir)
            .await
            .with_context(|| format!("creating {}", self.pulls_dir.display()))?;
        let metadata = fs::metadata(&self.pulls_dir).await?;
        anyhow::ensure!(
            !metadata.permissions().readonly(),
            "{} is read-only",
            self.pulls_dir.display()
        );
        Ok(())
    }
}
