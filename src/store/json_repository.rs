use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

pub(crate) const JOURNAL_FILE: &str = "commit.journal";

// Journal holds every document of a multi-document write. Once it is renamed into
// place the write is committed and replaying it finishes the write after a crash.
#[derive(Debug, Serialize, Deserialize)]
struct Journal {
    transaction_id: String,
    documents: BTreeMap<String, Value>,
}

// JsonFileRepository stores each document as <name>.json in the data directory.
#[derive(Debug)]
pub struct JsonFileRepository {
    dir: PathBuf,
    writer: Mutex<()>,
}

impl JsonFileRepository {
    // open creates the directory if needed and rolls forward any interrupted commit
    pub(crate) async fn open(dir: &Path) -> LibraryResult<Self> {
        fs::create_dir_all(dir).await?;
        let repo = Self {
            dir: dir.to_path_buf(),
            writer: Mutex::new(()),
        };
        let recovered = {
            let _guard = repo.writer.lock().await;
            repo.replay().await?
        };
        if recovered > 0 {
            warn!(dir = %dir.display(), recovered, "replayed interrupted commit");
        }
        Ok(repo)
    }

    fn document_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    fn journal_path(&self) -> PathBuf {
        self.dir.join(JOURNAL_FILE)
    }

    async fn read_journal(&self) -> LibraryResult<Option<Journal>> {
        match fs::read(self.journal_path()).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    // write to a sibling temp file, fsync, then rename over the target
    async fn write_atomic(&self, path: &Path, bytes: &[u8]) -> LibraryResult<()> {
        let mut tmp = OsString::from(path.as_os_str());
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        let mut file = fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(&tmp, path).await?;
        self.sync_directory().await
    }

    #[cfg(unix)]
    async fn sync_directory(&self) -> LibraryResult<()> {
        let dir = fs::File::open(&self.dir).await?;
        dir.sync_all().await?;
        Ok(())
    }

    #[cfg(not(unix))]
    async fn sync_directory(&self) -> LibraryResult<()> {
        Ok(())
    }

    async fn apply(&self, documents: &BTreeMap<String, Value>) -> LibraryResult<usize> {
        for (name, value) in documents {
            let bytes = serde_json::to_vec_pretty(value)?;
            self.write_atomic(&self.document_path(name), &bytes).await?;
        }
        Ok(documents.len())
    }

    async fn clear_journal(&self) -> LibraryResult<()> {
        fs::remove_file(self.journal_path()).await?;
        self.sync_directory().await
    }

    // caller must hold the writer lock
    async fn replay(&self) -> LibraryResult<usize> {
        match self.read_journal().await? {
            Some(journal) => {
                let applied = self.apply(&journal.documents).await?;
                self.clear_journal().await?;
                info!(transaction_id = journal.transaction_id.as_str(), applied, "journal replayed");
                Ok(applied)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl Repository for JsonFileRepository {
    async fn read(&self, name: &str) -> LibraryResult<Option<Value>> {
        // a pending journal is newer than the document files it covers
        if let Some(journal) = self.read_journal().await? {
            if let Some(value) = journal.documents.get(name) {
                return Ok(Some(value.clone()));
            }
        }
        match fs::read(self.document_path(name)).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write(&self, batch: &[(String, Value)]) -> LibraryResult<usize> {
        let _guard = self.writer.lock().await;
        // finish an earlier interrupted commit before layering a new one on top
        self.replay().await?;
        if let [(name, value)] = batch {
            let bytes = serde_json::to_vec_pretty(value)?;
            self.write_atomic(&self.document_path(name), &bytes).await?;
            return Ok(1);
        }
        let journal = Journal {
            transaction_id: Uuid::new_v4().to_string(),
            documents: batch.iter().cloned().collect(),
        };
        self.write_atomic(&self.journal_path(), &serde_json::to_vec(&journal)?).await?;
        let applied = self.apply(&journal.documents).await?;
        self.clear_journal().await?;
        Ok(applied)
    }
}
