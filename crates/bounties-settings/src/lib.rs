//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{BountiesConfigV1, CheckConfig, MarkersConfig, TableConfig};
pub use resolve::{DEFAULT_DATA_PATH, DEFAULT_README_PATH, Overrides, ResolvedConfig};

/// Schema identifier accepted in the optional `schema` key.
pub const SCHEMA_CONFIG_V1: &str = "bounties.config.v1";

/// Parse `bounties.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<BountiesConfigV1> {
    let cfg: BountiesConfigV1 = toml::from_str(input)?;
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }
    Ok(cfg)
}

/// Resolve the effective config (profile + overrides + per-check config + paths).
pub fn resolve_config(
    cfg: BountiesConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
