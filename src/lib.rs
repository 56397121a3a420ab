pub mod config;
pub mod detection;
pub mod error;
pub mod models;
pub mod store;

pub use config::{ChannelBand, CircularityBand, DetectorConfig};
pub use detection::ShapeCounter;
pub use error::CountError;
pub use models::{Region, ShapeMetrics};
pub use store::{DetectionDb, DetectionRecord, DetectionRepository, NewDetection};
