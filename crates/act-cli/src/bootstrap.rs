use anyhow::Context;
use act_config::ActConfig;

/// Load `.env` from the working directory, then the layered config.
pub fn load_config() -> anyhow::Result<ActConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }

    let config = ActConfig::load().context("failed to load configuration")?;
    tracing::debug!(
        keep_by_default = config.general.keep_by_default,
        export_path = %config.general.export_path,
        custom_prompt = config.prompt.is_configured(),
        "configuration loaded"
    );
    Ok(config)
}
