use std::cmp::Reverse;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::predictor::config::PredictorConfig;
use crate::wheel::{RouletteColor, SpinOutcome};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AdvisoryKind {
    ColorPressure,
    GreenVolatility,
    TrendFollowing,
    HotNumber,
    Inconclusive,
    EngineError,
}

/// The non-binding suggestion shown to the user. Summarizes historical
/// skew only; a fair wheel is memoryless and nothing here forecasts it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub text: String,
}

impl Advisory {
    fn new(kind: AdvisoryKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Fixed message shown when the analysis task itself failed.
    /// History is untouched in that case.
    pub fn engine_error() -> Self {
        Self::new(
            AdvisoryKind::EngineError,
            "Prediction engine unavailable. Maintain current strategy.",
        )
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PredictorError {
    /// Expected non-result while the session is still warming up.
    #[error("insufficient data: need at least {need} outcomes, have {have}")]
    InsufficientData { have: usize, need: usize },
}

/// Derive an advisory from a newest-first outcome history.
///
/// Pure and single-pass over the inputs: a color tally over the trend
/// window, a streak check on the leading entries, and a frequency map
/// over the full history for the hot number. Checks fire in priority
/// order: color pressure, green volatility, trend following, hot number.
pub fn predict(
    history: &[SpinOutcome],
    config: &PredictorConfig,
) -> Result<Advisory, PredictorError> {
    if history.len() < config.min_history {
        return Err(PredictorError::InsufficientData {
            have: history.len(),
            need: config.min_history,
        });
    }

    let recent = &history[..history.len().min(config.trend_window)];

    let red_in_recent = recent
        .iter()
        .filter(|outcome| outcome.color == RouletteColor::Red)
        .count();
    let red_ratio = red_in_recent as f32 / recent.len() as f32;

    if red_ratio > config.color_pressure_threshold {
        return Ok(Advisory::new(
            AdvisoryKind::ColorPressure,
            format!(
                "Detected RED streak ({:.0}%). Statistical pressure suggests betting BLACK.",
                red_ratio * 100.0
            ),
        ));
    }
    if red_ratio < 1.0 - config.color_pressure_threshold {
        return Ok(Advisory::new(
            AdvisoryKind::ColorPressure,
            format!(
                "Detected BLACK streak ({:.0}%). Statistical pressure suggests betting RED.",
                (1.0 - red_ratio) * 100.0
            ),
        ));
    }

    if let Some(latest) = history.first() {
        if latest.color == RouletteColor::Green {
            return Ok(Advisory::new(
                AdvisoryKind::GreenVolatility,
                "Green event detected. Volatility high. Recommend skipping or minimal bet.",
            ));
        }
        if recent.len() >= config.streak_length
            && recent[..config.streak_length]
                .iter()
                .all(|outcome| outcome.color == latest.color)
        {
            return Ok(Advisory::new(
                AdvisoryKind::TrendFollowing,
                format!(
                    "Streak of {} {}s. Trend following protocol: Bet {}.",
                    config.streak_length,
                    latest.color.as_str(),
                    latest.color.as_str()
                ),
            ));
        }
    }

    let mut counts: HashMap<u32, usize> = HashMap::new();
    for outcome in history {
        *counts.entry(outcome.value).or_insert(0) += 1;
    }

    // Ties break toward the smaller value so the advisory is deterministic.
    if let Some((value, _)) = counts
        .into_iter()
        .max_by_key(|&(value, count)| (count, Reverse(value)))
    {
        return Ok(Advisory::new(
            AdvisoryKind::HotNumber,
            format!(
                "Market flat. Hot number is {value}. Consider sector bets around it."
            ),
        ));
    }

    Ok(Advisory::new(
        AdvisoryKind::Inconclusive,
        "Pattern analysis inconclusive. Maintain current strategy.",
    ))
}
