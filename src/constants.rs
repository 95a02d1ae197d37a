use std::path::PathBuf;

use dirs::preference_dir;

pub const GAME_TITLE: &str = "Maze Generator 3000";
pub const WIN_MESSAGE: &str = "CONGRATULATIONS!!!";

/// Directory with the settings file, falls back to the working directory on systems without
/// a preference dir.
pub fn base_path() -> PathBuf {
    preference_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mazegame")
}
