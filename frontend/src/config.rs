use shared::DrawTuning;
use web_sys::window;

use crate::storage;

/// Wheel and power meter tuning, with any override saved in localStorage.
pub fn get_tuning() -> DrawTuning {
    storage::repository().load_tuning()
}

pub fn get_asset_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }
    String::new()
}

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", get_asset_base_url(), path)
    }
}
