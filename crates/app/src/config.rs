use shared_types::SiteConfig;

/// `site.toml`, embedded at compile time.
const SITE_TOML: &str = include_str!("../site.toml");

/// Load the embedded site configuration, falling back to defaults when it
/// does not parse.
pub fn load_site_config() -> SiteConfig {
    parse_or_default(SITE_TOML)
}

fn parse_or_default(source: &str) -> SiteConfig {
    match SiteConfig::from_toml_str(source) {
        Ok(config) => {
            tracing::info!(
                sections = ?config.sections,
                default_category = %config.resources.default_category,
                "site configuration loaded"
            );
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "invalid site.toml, using defaults");
            SiteConfig::default()
        }
    }
}
