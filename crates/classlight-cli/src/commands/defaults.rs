use anyhow::{Context, Result};
use classlight_config::HighlightConfig;

/// The default configuration rendered as TOML
pub fn render_defaults() -> Result<String> {
    HighlightConfig::default()
        .to_toml_string()
        .context("Failed to render default config")
}

pub fn handle_defaults() -> Result<()> {
    print!("{}", render_defaults()?);
    Ok(())
}
