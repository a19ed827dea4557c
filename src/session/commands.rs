use tauri::State;

use crate::predictor::{predict, Advisory, PredictorConfig};
use crate::session::state::SessionSnapshot;
use crate::wheel::{RouletteColor, SpinOutcome};
use crate::AppState;

#[tauri::command]
pub async fn spin_wheel(state: State<'_, AppState>) -> Result<SpinOutcome, String> {
    state.session.spin().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn record_manual_entry(
    state: State<'_, AppState>,
    color: RouletteColor,
    value: Option<u32>,
) -> Result<SpinOutcome, String> {
    state
        .session
        .record_manual(color, value)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn clear_history(state: State<'_, AppState>) -> Result<(), String> {
    state.session.clear().await;
    Ok(())
}

#[tauri::command]
pub async fn get_session_snapshot(
    state: State<'_, AppState>,
) -> Result<SessionSnapshot, String> {
    Ok(state.session.snapshot().await)
}

/// Stateless analysis over a caller-held history (newest first). Kept
/// alongside the store-driven workflow for frontends that track their
/// own history; safe to invoke repeatedly.
#[tauri::command]
pub fn predict_next_move(history: Vec<SpinOutcome>) -> Result<Advisory, String> {
    predict(&history, &PredictorConfig::default()).map_err(|e| e.to_string())
}
