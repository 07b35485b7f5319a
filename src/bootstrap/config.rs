use cr_core::ports::SettingsPort;
use cr_core::Settings;
use tracing::{error, info};

/// Load settings for startup.
///
/// A file that cannot be read or parsed falls back to defaults, which are
/// written back so the user has a file to edit.
pub async fn load_settings(port: &dyn SettingsPort) -> Settings {
    match port.load().await {
        Ok(settings) => match settings.validate() {
            Ok(()) => {
                info!("Settings loaded");
                settings
            }
            Err(err) => {
                error!(error = %err, "Settings invalid, using defaults");
                Settings::default()
            }
        },
        Err(err) => {
            error!(error = %err, "Failed to load settings, using defaults");
            let defaults = Settings::default();
            if let Err(err) = port.save(&defaults).await {
                error!(error = %err, "Failed to save default settings");
            }
            defaults
        }
    }
}
