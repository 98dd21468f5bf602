use anyhow::Context;
use sb_config::SbConfig;

use crate::cli::GlobalFlags;

/// Load layered config (`.env`, TOML files, env vars), then apply flag overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SbConfig> {
    let mut config = SbConfig::load_with_dotenv().context("failed to load configuration")?;

    if let Some(api) = &flags.api {
        config.api.base_url.clone_from(api);
        config
            .validate()
            .context("invalid --api override")?;
    }

    tracing::debug!(base_url = %config.api.base_url, "configuration loaded");
    Ok(config)
}
