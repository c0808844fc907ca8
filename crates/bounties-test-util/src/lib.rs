//! Shared test utilities for the bounties workspace.
//!
//! Lives in its own crate because both the CLI tests and `xtask` compare reports against
//! golden files.

use serde_json::Value;

const VERSION_PLACEHOLDER: &str = "__VERSION__";
const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";

/// Normalize non-deterministic report fields for golden-file comparison.
///
/// `tool.version` is replaced only on a root report envelope (`schema`, `tool`, `verdict`,
/// `findings` and `data` all present), so finding payloads are never touched. The envelope
/// timestamps `started_at` / `finished_at` are replaced at the root as well.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    let Some(obj) = value.as_object_mut() else {
        return value;
    };
    let is_envelope = ["schema", "tool", "verdict", "findings", "data"]
        .iter()
        .all(|k| obj.contains_key(*k));
    if !is_envelope {
        return value;
    }

    if let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
        && tool.contains_key("version")
    {
        tool.insert(
            "version".to_string(),
            Value::String(VERSION_PLACEHOLDER.to_string()),
        );
    }
    for key in ["started_at", "finished_at"] {
        if obj.contains_key(key) {
            obj.insert(
                key.to_string(),
                Value::String(TIMESTAMP_PLACEHOLDER.to_string()),
            );
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_envelope_fields() {
        let report = json!({
            "schema": "bounties.report.v1",
            "tool": { "name": "bounties", "version": "0.1.0" },
            "started_at": "2026-01-01T00:00:00Z",
            "finished_at": "2026-01-01T00:00:01Z",
            "verdict": "pass",
            "findings": [],
            "data": { "profile": "strict" }
        });
        let n = normalize_nondeterministic(report);
        assert_eq!(n["tool"]["version"], "__VERSION__");
        assert_eq!(n["tool"]["name"], "bounties");
        assert_eq!(n["started_at"], "__TIMESTAMP__");
        assert_eq!(n["finished_at"], "__TIMESTAMP__");
        assert_eq!(n["verdict"], "pass");
    }

    #[test]
    fn leaves_non_envelopes_and_nested_payloads_alone() {
        let plain = json!({ "tool": { "version": "1" }, "started_at": "x" });
        assert_eq!(normalize_nondeterministic(plain.clone()), plain);

        let report = json!({
            "schema": "bounties.report.v1",
            "tool": { "name": "bounties", "version": "0.1.0" },
            "verdict": "fail",
            "findings": [{ "data": { "started_at": "keep", "tool": { "version": "keep" } } }],
            "data": {}
        });
        let n = normalize_nondeterministic(report);
        assert_eq!(n["findings"][0]["data"]["started_at"], "keep");
        assert_eq!(n["findings"][0]["data"]["tool"]["version"], "keep");
    }
}
