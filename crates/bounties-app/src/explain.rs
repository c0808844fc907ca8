//! The `explain` use case: remediation guidance for check IDs and finding codes.

use bounties_types::explain::{self, Explanation};

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    NotFound {
        identifier: String,
        /// Known identifiers sharing a prefix or substring with the query.
        suggestions: Vec<&'static str>,
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    let identifier = identifier.trim();
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            suggestions: suggest(identifier),
        },
    }
}

fn suggest(identifier: &str) -> Vec<&'static str> {
    let needle = identifier.to_ascii_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    explain::all_check_ids()
        .iter()
        .chain(explain::all_codes())
        .copied()
        .filter(|known| {
            known.contains(needle.as_str())
                || known
                    .rsplit('.')
                    .next()
                    .is_some_and(|tail| needle.contains(tail))
        })
        .collect()
}

/// Terminal rendering with fenced `bounties.yml` snippets.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.chars().count()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\nHow to fix\n----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");

    for (label, snippet) in [
        ("Flagged", exp.examples.before),
        ("Accepted", exp.examples.after),
    ] {
        out.push_str(label);
        out.push_str(":\n```yaml\n");
        out.push_str(snippet.trim_end());
        out.push_str("\n```\n\n");
    }

    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

pub fn format_not_found(identifier: &str, suggestions: &[&str]) -> String {
    let mut out = format!("Unknown check_id or code: {identifier}\n");

    if !suggestions.is_empty() {
        out.push_str("\nDid you mean:\n");
        for s in suggestions {
            out.push_str(&format!("  - {s}\n"));
        }
    }

    out.push_str("\nAvailable check_ids:\n");
    for id in explain::all_check_ids() {
        out.push_str(&format!("  - {id}\n"));
    }
    out.push_str("\nAvailable codes:\n");
    for code in explain::all_codes() {
        out.push_str(&format!("  - {code}\n"));
    }

    out
}
