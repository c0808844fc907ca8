use crate::{model::BountiesConfigV1, presets};
use anyhow::Context;
use bounties_domain::policy::{EffectiveConfig, FailOn};
use bounties_render::{Markers, TableOptions};
use bounties_types::{RepoPath, Severity};
use globset::Glob;

pub const DEFAULT_DATA_PATH: &str = "bounties.yml";
pub const DEFAULT_README_PATH: &str = ".github/README.md";

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_findings: Option<u32>,
    pub data: Option<String>,
    pub readme: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub data_path: RepoPath,
    pub readme_path: RepoPath,
    pub markers: Markers,
    pub table: TableOptions,
}

pub fn resolve_config(
    cfg: BountiesConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let mut effective = presets::preset(&profile)?;

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        let Some(entry) = effective.checks.get_mut(check_id) else {
            anyhow::bail!("unknown check_id in [checks]: {check_id}");
        };

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
        if !cc.allow.is_empty() {
            validate_allowlist(check_id, &cc.allow)?;
            entry.allow = cc.allow.clone();
        }
    }

    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    let data_path = RepoPath::new(
        overrides
            .data
            .or(cfg.data)
            .as_deref()
            .unwrap_or(DEFAULT_DATA_PATH),
    );
    let readme_path = RepoPath::new(
        overrides
            .readme
            .or(cfg.readme)
            .as_deref()
            .unwrap_or(DEFAULT_README_PATH),
    );

    let mut markers = Markers::default();
    if let Some(start) = cfg.markers.start {
        markers.start = start;
    }
    if let Some(end) = cfg.markers.end {
        markers.end = end;
    }
    if markers.start.is_empty() || markers.end.is_empty() || markers.start == markers.end {
        anyhow::bail!("markers.start and markers.end must be non-empty and distinct");
    }

    let mut table = TableOptions::default();
    if let Some(len) = cfg.table.name_max_len {
        if len == 0 {
            anyhow::bail!("table.name_max_len must be at least 1");
        }
        table.name_max_len = len;
    }
    if let Some(service) = cfg.table.icon_service {
        table.icon_service = service.trim_end_matches('/').to_string();
    }

    Ok(ResolvedConfig {
        effective,
        data_path,
        readme_path,
        markers,
        table,
    })
}

fn validate_allowlist(check_id: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern)
            .with_context(|| format!("invalid allow glob for {check_id}: {pattern}"))?;
    }
    Ok(())
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CheckConfig, parse_config_toml};
    use bounties_types::ids;

    #[test]
    fn defaults_are_strict_with_standard_paths() {
        let resolved =
            resolve_config(BountiesConfigV1::default(), Overrides::default()).expect("resolve");
        assert_eq!(resolved.effective.profile, "strict");
        assert_eq!(resolved.effective.fail_on, FailOn::Error);
        assert_eq!(resolved.data_path.as_str(), "bounties.yml");
        assert_eq!(resolved.readme_path.as_str(), ".github/README.md");
        assert_eq!(resolved.markers.start, "<!-- bounties-start -->");
        assert_eq!(resolved.table.name_max_len, 40);
    }

    #[test]
    fn overrides_win_over_file() {
        let cfg = parse_config_toml("profile = \"strict\"\nmax_findings = 5\ndata = \"a.yml\"")
            .expect("parse");
        let resolved = resolve_config(
            cfg,
            Overrides {
                profile: Some("lenient".to_string()),
                max_findings: Some(7),
                data: Some("./b.yml".to_string()),
                readme: None,
            },
        )
        .expect("resolve");
        assert_eq!(resolved.effective.profile, "lenient");
        assert_eq!(resolved.effective.max_findings, 7);
        assert_eq!(resolved.data_path.as_str(), "b.yml");
    }

    #[test]
    fn per_check_overrides_apply() {
        let mut cfg = BountiesConfigV1::default();
        cfg.checks.insert(
            ids::CHECK_DIRECTORY_DUPLICATES.to_string(),
            CheckConfig {
                enabled: None,
                severity: Some("warn".to_string()),
                allow: vec!["Mozilla*".to_string()],
            },
        );
        cfg.checks.insert(
            ids::CHECK_COMPANY_UNKNOWN_FIELDS.to_string(),
            CheckConfig {
                enabled: Some(false),
                ..CheckConfig::default()
            },
        );

        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        let dup = resolved
            .effective
            .check_policy(ids::CHECK_DIRECTORY_DUPLICATES)
            .expect("enabled");
        assert_eq!(dup.severity, Severity::Warning);
        assert_eq!(dup.allow, vec!["Mozilla*".to_string()]);
        assert!(
            resolved
                .effective
                .check_policy(ids::CHECK_COMPANY_UNKNOWN_FIELDS)
                .is_none()
        );
    }

    #[test]
    fn rejects_bad_values_with_context() {
        let bad_sev = parse_config_toml("[checks.\"company.url_format\"]\nseverity = \"fatal\"")
            .expect("parse");
        let err = resolve_config(bad_sev, Overrides::default()).expect_err("bad severity");
        assert!(format!("{err:#}").contains("invalid severity for company.url_format"));

        let bad_glob = parse_config_toml("[checks.\"directory.duplicates\"]\nallow = [\"[\"]")
            .expect("parse");
        assert!(resolve_config(bad_glob, Overrides::default()).is_err());

        let unknown = parse_config_toml("[checks.\"company.logo_format\"]\nenabled = true")
            .expect("parse");
        assert!(resolve_config(unknown, Overrides::default()).is_err());

        let same_markers =
            parse_config_toml("[markers]\nstart = \"<!-- x -->\"\nend = \"<!-- x -->\"")
                .expect("parse");
        assert!(resolve_config(same_markers, Overrides::default()).is_err());
    }

    #[test]
    fn fail_on_warning_from_file() {
        let cfg = parse_config_toml("fail_on = \"warning\"").expect("parse");
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert_eq!(resolved.effective.fail_on, FailOn::Warning);
    }
}
