//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use bounties_test_util::normalize_nondeterministic;
use schemars::schema_for;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_directory_schema() -> schemars::Schema {
    schema_for!(bounties_types::Directory)
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(bounties_types::BountiesReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(bounties_settings::BountiesConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "bounties.directory.v1.json",
            generate: generate_directory_schema,
        },
        SchemaSpec {
            filename: "bounties.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "bounties.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut stale = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        let expected = serialize_schema(&(spec.generate)())?;
        match fs::read_to_string(&path) {
            Ok(actual) if actual == expected => {}
            Ok(_) => stale.push(format!("{} (out of date)", spec.filename)),
            Err(_) => stale.push(format!("{} (missing)", spec.filename)),
        }
    }

    if stale.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    eprintln!("Schemas needing regeneration:");
    for name in &stale {
        eprintln!("  - {}", name);
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Check fixtures: directory schema vs typed parser, golden reports");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
}

/// No absolute paths, no `../`, forward slashes only.
fn is_clean_path(path: &str) -> bool {
    !(path.starts_with('/')
        || path.starts_with('\\')
        || path.contains("..")
        || path.contains('\\')
        || (path.len() >= 2 && path.as_bytes()[1] == b':'))
}

fn compile(schema: &schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(schema).context("Failed to serialize schema")?;
    jsonschema::validator_for(&value).map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))
}

/// The data file a fixture's checks run against: `data` from its config, else `bounties.yml`.
fn fixture_data_file(fixture_dir: &Path) -> anyhow::Result<PathBuf> {
    let cfg_path = fixture_dir.join("bounties.toml");
    let data = if cfg_path.exists() {
        let text = fs::read_to_string(&cfg_path)
            .with_context(|| format!("Failed to read {}", cfg_path.display()))?;
        bounties_settings::parse_config_toml(&text)
            .with_context(|| format!("Failed to parse {}", cfg_path.display()))?
            .data
    } else {
        None
    };
    Ok(fixture_dir.join(data.as_deref().unwrap_or(bounties_settings::DEFAULT_DATA_PATH)))
}

/// Fixture conformance.
///
/// 1. Every fixture data file is accepted by the emitted directory schema exactly when the
///    strict typed parser accepts it, so the schema and the serde types cannot drift apart.
/// 2. Golden `expected.report.json` files validate against the report schema, carry
///    placeholders instead of real timestamps/versions, and use clean repo-relative paths.
fn conform() -> anyhow::Result<()> {
    let directory_schema = compile(&generate_directory_schema())?;
    let report_schema = compile(&generate_report_schema())?;
    println!("✓ directory and report schemas compile");

    let mut dirs: Vec<PathBuf> = fs::read_dir(fixtures_dir())
        .context("Failed to read tests/fixtures/")?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();

    let mut errors = Vec::new();
    let mut data_files = 0;
    let mut goldens = 0;

    for dir in &dirs {
        let name = dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let data_path = fixture_data_file(dir)?;
        if data_path.exists() {
            let text = fs::read_to_string(&data_path)
                .with_context(|| format!("Failed to read {}", data_path.display()))?;
            let typed_ok = bounties_repo::parse_companies(&text).is_ok();
            let schema_ok = match serde_yaml::from_str::<Value>(&text) {
                Ok(value) => directory_schema.is_valid(&value),
                Err(_) => false,
            };
            if typed_ok != schema_ok {
                errors.push(format!(
                    "{name}: schema {} the data file but the typed parser {} it",
                    verb(schema_ok),
                    verb(typed_ok)
                ));
            } else {
                println!("  ✓ {name}: data file {} by schema and parser", verb(typed_ok));
            }
            data_files += 1;
        }

        let golden_path = dir.join("expected.report.json");
        if golden_path.exists() {
            let content = fs::read_to_string(&golden_path)
                .with_context(|| format!("Failed to read {}", golden_path.display()))?;
            let value: Value = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {} as JSON", golden_path.display()))?;

            for err in report_schema.iter_errors(&value) {
                errors.push(format!("{name}: expected.report.json: {err}"));
            }
            if normalize_nondeterministic(value.clone()) != value {
                errors.push(format!(
                    "{name}: expected.report.json has real timestamps or version; use placeholders"
                ));
            }
            errors.extend(report_path_errors(&name, &value));
            goldens += 1;
        }
    }

    if data_files == 0 {
        bail!("No fixture data files found in {}", fixtures_dir().display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ {data_files} data files and {goldens} golden reports conform");
    Ok(())
}

fn verb(accepted: bool) -> &'static str {
    if accepted { "accepts" } else { "rejects" }
}

fn report_path_errors(name: &str, report: &Value) -> Vec<String> {
    let mut errors = Vec::new();
    if let Some(path) = report.pointer("/data/data_file").and_then(Value::as_str)
        && !is_clean_path(path)
    {
        errors.push(format!("{name}: data.data_file '{path}' is not clean"));
    }
    let findings = report
        .get("findings")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    for (i, finding) in findings.iter().enumerate() {
        if let Some(path) = finding.pointer("/location/path").and_then(Value::as_str)
            && !is_clean_path(path)
        {
            errors.push(format!(
                "{name}: findings[{i}].location.path '{path}' is not clean"
            ));
        }
    }
    errors
}

/// Validate that all check IDs and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let check_ids = bounties_types::explain::all_check_ids();
    let codes = bounties_types::explain::all_codes();

    let mut errors = Vec::new();
    for (kind, ids) in [("Check ID", check_ids), ("Code", codes)] {
        for id in ids {
            let Some(exp) = bounties_types::explain::lookup_explanation(id) else {
                errors.push(format!("{kind} '{id}' has no explanation"));
                continue;
            };
            for (field, text) in [
                ("title", exp.title),
                ("description", exp.description),
                ("remediation", exp.remediation),
                ("before example", exp.examples.before),
                ("after example", exp.examples.after),
            ] {
                if text.trim().is_empty() {
                    errors.push(format!("{kind} '{id}' has empty {field}"));
                }
            }
            if let Err(err) = serde_yaml::from_str::<Value>(exp.examples.after) {
                errors.push(format!("{kind} '{id}' after example is not YAML: {err}"));
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} check IDs have explanations", check_ids.len());
        println!("✓ {} codes have explanations", codes.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
