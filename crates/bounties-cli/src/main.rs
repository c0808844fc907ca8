//! CLI entry point for bounties.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging and exit codes.
//! All business logic lives in the `bounties-app` crate.

use anyhow::Context;
use bounties_app::{
    CheckInput, ExplainOutput, parse_report_json, render_annotations, render_markdown, run_check,
    run_explain, run_readme, run_table, runtime_error_report, serialize_report, to_renderable,
    verdict_exit_code,
};
use bounties_settings::Overrides;
use bounties_types::{BountiesReport, RepoPath};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

const EXIT_POLICY_FAILURE: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "bounties",
    version,
    about = "Validate the security disclosure directory and keep its README table current"
)]
struct Cli {
    /// Repository root (directory containing bounties.yml).
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Path to the bounties config TOML, relative to the repo root.
    #[arg(long, default_value = "bounties.toml")]
    config: Utf8PathBuf,

    /// Override the data file path (relative to the repo root).
    #[arg(long)]
    data: Option<String>,

    /// Override profile (strict|lenient).
    #[arg(long)]
    profile: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    /// Log level (e.g. info, warning) or filter directive. RUST_LOG takes precedence; LOG_LEVEL is the fallback.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the directory and write a JSON report.
    Check {
        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/bounties/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/bounties/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Print the directory as a Markdown table.
    Table {
        /// Write the table to this file instead of stdout.
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Splice the directory table into the README between its markers.
    Readme {
        /// Override the README path (relative to the repo root).
        #[arg(long)]
        readme: Option<String>,

        /// Do not write; exit 2 if the README is out of date.
        #[arg(long)]
        check: bool,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/bounties/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/bounties/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "company.reward_values") or code (e.g., "unknown_reward").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match &cli.cmd {
        Commands::Check {
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_check(&cli, report_out, *write_markdown, markdown_out),
        Commands::Table { output } => cmd_table(&cli, output.as_deref()),
        Commands::Readme { readme, check } => cmd_readme(&cli, readme.clone(), *check),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Annotations { report, max } => cmd_annotations(report, *max),
        Commands::Explain { identifier } => cmd_explain(identifier),
    }
}

/// Logs go to stderr so they never mix with tables or reports on stdout.
fn init_logging(cli_level: Option<&str>) {
    let level = cli_level
        .map(str::to_string)
        .or_else(|| std::env::var("LOG_LEVEL").ok());
    let fallback = log_directive(level.as_deref());

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Filter directive for a `--log-level`/`LOG_LEVEL` value.
///
/// Bare words are read as levels, including the aliases `WARNING`, `CRITICAL` and `FATAL`;
/// an unrecognised word falls back to `warn` instead of becoming a target name. Values with
/// `=` are passed through as tracing directives.
fn log_directive(level: Option<&str>) -> String {
    let Some(level) = level.map(str::trim).filter(|l| !l.is_empty()) else {
        return "warn".to_string();
    };
    let level = level.to_ascii_lowercase();
    if level.contains('=') {
        return level;
    }
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" | "off" => level,
        "warning" => "warn".to_string(),
        "critical" | "fatal" => "error".to_string(),
        _ => "warn".to_string(),
    }
}

fn repo_root(cli: &Cli) -> Utf8PathBuf {
    cli.repo_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.repo_root.clone())
}

/// Missing config is allowed (defaults apply); unreadable config is not.
fn read_config(repo_root: &Utf8Path, config: &Utf8Path) -> anyhow::Result<String> {
    let path = repo_root.join(config);
    match std::fs::read_to_string(&path) {
        Ok(text) => {
            tracing::debug!(path = path.as_str(), "loaded config");
            Ok(text)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = path.as_str(), "no config file; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

/// Data file a check would have read: `--data`, else `data` from the config, else the default.
/// Best effort, for reports written after the check itself failed.
fn configured_data_file(cli: &Cli, repo_root: &Utf8Path) -> RepoPath {
    let from_config = || {
        let text = read_config(repo_root, &cli.config).ok()?;
        bounties_settings::parse_config_toml(&text).ok()?.data
    };
    RepoPath::new(
        cli.data
            .clone()
            .or_else(from_config)
            .as_deref()
            .unwrap_or(bounties_settings::DEFAULT_DATA_PATH),
    )
}

fn overrides(cli: &Cli, readme: Option<String>) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        max_findings: cli.max_findings,
        data: cli.data.clone(),
        readme,
    }
}

fn cmd_check(
    cli: &Cli,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let repo_root = repo_root(cli);

    let result = (|| -> anyhow::Result<i32> {
        if !repo_root.exists() {
            anyhow::bail!("repo root does not exist: {}", repo_root);
        }
        let cfg_text = read_config(&repo_root, &cli.config)?;

        let output = run_check(CheckInput {
            repo_root: &repo_root,
            config_text: &cfg_text,
            overrides: overrides(cli, None),
        })?;

        write_outputs(&output.report, report_out, write_markdown, markdown_out)?;
        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let data_file = configured_data_file(cli, &repo_root);
            let report = runtime_error_report(&format!("{err:#}"), data_file.as_str());
            let _ = write_outputs(&report, report_out, write_markdown, markdown_out);
            eprintln!("bounties error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_outputs(
    report: &BountiesReport,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    write_file(report_out, &data).context("write report json")?;
    if write_markdown {
        let md = render_markdown(&to_renderable(report));
        write_file(markdown_out, md.as_bytes()).context("write markdown")?;
    }
    Ok(())
}

fn cmd_table(cli: &Cli, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let repo_root = repo_root(cli);
    let cfg_text = read_config(&repo_root, &cli.config)?;

    let out = run_table(CheckInput {
        repo_root: &repo_root,
        config_text: &cfg_text,
        overrides: overrides(cli, None),
    })?;

    let Some(table) = out.table else {
        fail_policy(out.check.report.findings.len());
    };

    match output {
        Some(path) => write_file(path, table.as_bytes()).context("write table")?,
        None => print!("{}", table),
    }
    Ok(())
}

fn cmd_readme(cli: &Cli, readme: Option<String>, check_only: bool) -> anyhow::Result<()> {
    let repo_root = repo_root(cli);
    let cfg_text = read_config(&repo_root, &cli.config)?;

    let out = run_readme(CheckInput {
        repo_root: &repo_root,
        config_text: &cfg_text,
        overrides: overrides(cli, readme),
    })?;

    let Some(updated) = out.updated else {
        fail_policy(out.table.check.report.findings.len());
    };

    if check_only {
        if out.changed {
            eprintln!(
                "bounties: {} is out of date; run `bounties readme` to regenerate it",
                out.readme_path.as_str()
            );
            std::process::exit(EXIT_POLICY_FAILURE);
        }
        return Ok(());
    }

    if out.changed {
        let path = out.readme_path.under(&repo_root);
        write_file(&path, updated.as_bytes()).context("write readme")?;
        tracing::info!(path = path.as_str(), "readme updated");
    } else {
        tracing::info!(path = out.readme_path.as_str(), "readme already up to date");
    }
    Ok(())
}

fn fail_policy(findings: usize) -> ! {
    eprintln!(
        "bounties: directory failed validation ({findings} findings); run `bounties check` for details"
    );
    std::process::exit(EXIT_POLICY_FAILURE);
}

fn write_file(path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write: {}", path))?;
    Ok(())
}

fn read_report(report_path: &Utf8Path) -> anyhow::Result<BountiesReport> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    parse_report_json(&report_text)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    let md = render_markdown(&to_renderable(&report));

    match output {
        Some(out_path) => write_file(out_path, md.as_bytes()).context("write markdown output")?,
        None => print!("{}", md),
    }
    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", bounties_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            suggestions,
        } => {
            eprint!(
                "{}",
                bounties_app::format_not_found(&identifier, &suggestions)
            );
            std::process::exit(1);
        }
    }
}
