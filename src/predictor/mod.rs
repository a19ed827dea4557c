pub mod analysis;
pub mod config;

pub use analysis::{predict, Advisory, AdvisoryKind, PredictorError};
pub use config::PredictorConfig;
