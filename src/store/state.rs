use std::path::{Path, PathBuf};

use anyhow::Context;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use tokio::fs as async_fs;
use uuid::Uuid;

const DB_FILE_NAME: &str = "detections.db";
const UPLOAD_DIR_NAME: &str = "uploads";

pub(super) struct StoreState {
    data_dir: PathBuf,
    pool: SqlitePool,
}

impl std::fmt::Debug for StoreState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreState")
            .field("data_dir", &self.data_dir)
            .finish()
    }
}

impl StoreState {
    pub(super) async fn new<P: AsRef<Path>>(data_dir: P) -> anyhow::Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        let uploads_dir = data_dir.join(UPLOAD_DIR_NAME);
        async_fs::create_dir_all(&uploads_dir)
            .await
            .with_context(|| format!("Failed to create uploads directory {:?}", uploads_dir))?;

        let db_file = data_dir.join(DB_FILE_NAME);
        let connect_opts = SqliteConnectOptions::new()
            .filename(&db_file)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connect_opts)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { data_dir, pool })
    }

    pub(super) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn uploads_dir(&self) -> PathBuf {
        self.data_dir.join(UPLOAD_DIR_NAME)
    }

    /// Copy an image into the managed uploads directory under a generated
    /// name, returning that name. The name is a fresh UUID plus the source
    /// extension, so nothing user-controlled reaches the filesystem.
    pub(super) async fn store_upload<P: AsRef<Path>>(&self, img_path: P) -> anyhow::Result<String> {
        let stored_name = match img_path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };
        let dest_path = self.uploads_dir().join(&stored_name);
        async_fs::copy(&img_path, &dest_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to copy upload from {:?} to {:?}",
                    img_path.as_ref(),
                    dest_path
                )
            })?;
        Ok(stored_name)
    }

    pub(super) fn resolve_upload(&self, stored_name: &str) -> PathBuf {
        self.uploads_dir().join(stored_name)
    }

    pub(super) async fn delete_upload(&self, stored_name: &str) -> anyhow::Result<()> {
        let path = self.resolve_upload(stored_name);
        async_fs::remove_file(&path)
            .await
            .with_context(|| format!("Failed to delete upload {:?}", path))?;
        Ok(())
    }

    /// Flush the WAL into the main database file and close the pool,
    /// releasing file handles.
    pub(super) async fn close(&self) -> anyhow::Result<()> {
        sqlx::query("PRAGMA wal_checkpoint(TRUNCATE);")
            .execute(&self.pool)
            .await?;
        self.pool.close().await;
        Ok(())
    }
}
