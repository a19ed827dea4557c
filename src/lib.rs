mod predictor;
mod session;
mod wheel;

use session::commands::{
    clear_history, get_session_snapshot, predict_next_move, record_manual_entry, spin_wheel,
};
use session::SessionController;

pub(crate) struct AppState {
    pub(crate) session: SessionController,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Idle Roulette starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            use tauri::Manager;

            let session = SessionController::new(app.handle().clone());
            app.manage(AppState { session });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            spin_wheel,
            record_manual_entry,
            clear_history,
            get_session_snapshot,
            predict_next_move,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
