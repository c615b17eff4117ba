use crate::config::Settings;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

impl Settings {
    /// Loads settings from a TOML file. Every field is optional; missing
    /// sections and keys fall back to the defaults.
    ///
    /// ```toml
    /// [email]
    /// sender_address = "sales@example.com"
    /// smtp_host = "smtp.example.com"
    /// smtp_port = 587
    ///
    /// [whatsapp]
    /// load_delay_secs = 8
    /// close_tab = false
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Settings> {
        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }
}
