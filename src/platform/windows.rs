// ReadLater platform paths for Windows
// Data: %APPDATA%/ReadLater

use std::env;
use std::path::PathBuf;

/// Returns the data directory for ReadLater on Windows.
pub fn get_data_dir() -> PathBuf {
    if let Ok(appdata) = env::var("APPDATA") {
        PathBuf::from(appdata).join("ReadLater")
    } else {
        PathBuf::from("C:\\ReadLater")
    }
}
