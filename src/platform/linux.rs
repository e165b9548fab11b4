// ReadLater platform paths for Linux
// Data: ~/.local/share/readlater

use std::env;
use std::path::PathBuf;

/// Returns the data directory for ReadLater on Linux.
/// Uses `$XDG_DATA_HOME/readlater` if set, otherwise `~/.local/share/readlater`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("readlater")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("readlater")
    }
}
