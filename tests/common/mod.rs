mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from cigcount for tests
pub use cigcount::store::{DetectionDb, DetectionRecord, DetectionRepository, NewDetection};
pub use cigcount::{ChannelBand, CircularityBand, CountError, DetectorConfig, ShapeCounter};
