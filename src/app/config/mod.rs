mod load_settings;

pub use load_settings::{SETTINGS_FILE, load_settings, settings_path};
