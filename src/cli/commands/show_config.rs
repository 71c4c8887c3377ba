use anyhow::Result;
use tracing::{debug, error};

use crate::config::Settings;

pub fn show_config() -> Result<()> {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            return Err(e.into());
        }
    };
    debug!("Rendering settings for {}", settings.app_name);

    print!("{}", serde_yaml::to_string(&settings)?);
    Ok(())
}
