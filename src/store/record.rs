use time::OffsetDateTime;

/// One persisted counting run.
#[derive(Debug, Clone)]
pub struct DetectionRecord {
    pub id: i64,
    /// Timezone-aware moment the count was recorded.
    pub recorded_at: OffsetDateTime,
    pub count: u32,
    /// Name the image was uploaded under, kept for display.
    pub filename: String,
    /// Generated name of the stored copy in the uploads directory.
    pub stored_name: String,
    pub(super) _guard: (),
}

/// Payload for inserting a new record. The timestamp is assigned by the
/// store at insert time.
#[derive(Debug, Clone)]
pub struct NewDetection {
    pub count: u32,
    pub filename: String,
    pub stored_name: String,
}

pub trait DetectionRepository {
    fn get_detections(&self) -> impl Future<Output = anyhow::Result<Vec<DetectionRecord>>>;
    fn get_detection_by_id(
        &self,
        id: i64,
    ) -> impl Future<Output = anyhow::Result<Option<DetectionRecord>>>;
    fn add_detection(
        &self,
        detection: &NewDetection,
    ) -> impl Future<Output = anyhow::Result<DetectionRecord>>;
    fn delete_detection(&self, record: DetectionRecord) -> impl Future<Output = anyhow::Result<()>>;
}
