pub mod commands;
pub mod controller;
pub mod state;
pub mod stats;

pub use controller::SessionController;
pub use state::{AnalysisPhase, AnalysisTicket, SessionSnapshot, SessionState};
pub use stats::AggregateStats;
