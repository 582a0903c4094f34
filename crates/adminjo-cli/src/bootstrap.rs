use adminjo_config::AdminConfig;
use anyhow::Context;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<AdminConfig> {
    let mut config = AdminConfig::load_with_dotenv().context("failed to load adminjo config")?;

    if let Some(dir) = &flags.data_dir {
        tracing::debug!(dir = %dir.display(), "data directory overridden on the command line");
        config.data.dir.clone_from(dir);
    }

    Ok(config)
}
