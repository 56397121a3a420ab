mod record;
mod state;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use sqlx::{Row, sqlite::SqliteRow};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use state::StoreState;

pub use record::{DetectionRecord, DetectionRepository, NewDetection};

/// Handle to the detection result store: a sqlite database plus the
/// uploads directory holding the analyzed images, both living under one
/// data directory. Open it once at startup and pass it around by
/// reference.
#[derive(Debug)]
pub struct DetectionDb {
    state: Arc<StoreState>,
}

impl DetectionDb {
    pub async fn open<P: AsRef<Path>>(data_dir: P) -> anyhow::Result<Self> {
        Ok(Self {
            state: Arc::new(StoreState::new(data_dir).await?),
        })
    }

    /// Copy a source image into the managed uploads directory, returning
    /// the generated filename of the stored copy.
    pub async fn store_upload<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<String> {
        self.state.store_upload(path).await
    }

    /// Absolute path of a stored upload.
    pub fn upload_path(&self, stored_name: &str) -> PathBuf {
        self.state.resolve_upload(stored_name)
    }

    pub async fn remove_upload(&self, stored_name: &str) -> anyhow::Result<()> {
        self.state.delete_upload(stored_name).await
    }

    /// Checkpoint and close the underlying pool. Call before process exit;
    /// the handle must not be used afterwards.
    pub async fn close(&self) -> anyhow::Result<()> {
        self.state.close().await
    }
}

fn record_from_row(row: &SqliteRow) -> anyhow::Result<DetectionRecord> {
    let recorded_at_str: String = row.try_get("recorded_at")?;
    let recorded_at = OffsetDateTime::parse(&recorded_at_str, &Rfc3339)?;
    let count: i64 = row.try_get("count")?;
    Ok(DetectionRecord {
        id: row.try_get("id")?,
        recorded_at,
        count: count
            .try_into()
            .expect("count bounded by database constraint"),
        filename: row.try_get("filename")?,
        stored_name: row.try_get("stored_name")?,
        _guard: (),
    })
}

impl DetectionRepository for DetectionDb {
    async fn get_detections(&self) -> anyhow::Result<Vec<DetectionRecord>> {
        sqlx::query(
            "SELECT id, recorded_at, count, filename, stored_name FROM detection
             ORDER BY id DESC",
        )
        .fetch_all(self.state.pool())
        .await?
        .iter()
        .map(record_from_row)
        .collect()
    }

    async fn get_detection_by_id(&self, id: i64) -> anyhow::Result<Option<DetectionRecord>> {
        let row = sqlx::query(
            "SELECT id, recorded_at, count, filename, stored_name FROM detection
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.state.pool())
        .await?;
        match row {
            Some(row) => Ok(Some(record_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn add_detection(&self, detection: &NewDetection) -> anyhow::Result<DetectionRecord> {
        let recorded_at =
            OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let recorded_at_str = recorded_at.format(&Rfc3339)?;
        let row = sqlx::query(
            "INSERT INTO detection (recorded_at, count, filename, stored_name)
             VALUES ($1, $2, $3, $4)
             RETURNING id, recorded_at, count, filename, stored_name",
        )
        .bind(&recorded_at_str)
        .bind(i64::from(detection.count))
        .bind(&detection.filename)
        .bind(&detection.stored_name)
        .fetch_one(self.state.pool())
        .await?;
        record_from_row(&row)
    }

    async fn delete_detection(&self, record: DetectionRecord) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM detection WHERE id = $1")
            .bind(record.id)
            .execute(self.state.pool())
            .await?;
        Ok(())
    }
}
