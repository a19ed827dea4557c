/// Tunables for the advisory heuristic.
#[derive(Debug, Clone, Copy)]
pub struct PredictorConfig {
    /// Outcomes required before any analysis runs.
    pub min_history: usize,
    /// How many of the newest outcomes feed the color-pressure ratio.
    pub trend_window: usize,
    /// Red share of the trend window above which a color-pressure
    /// advisory fires (and below `1 - threshold`, the black equivalent).
    pub color_pressure_threshold: f32,
    /// Leading same-color run length that triggers trend following.
    pub streak_length: usize,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            min_history: 3,
            trend_window: 15,
            color_pressure_threshold: 0.65,
            streak_length: 3,
        }
    }
}
