use bounties_types::Finding;
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - data file path
/// - JSON pointer (if present)
/// - `data.value` (if present)
///
/// Message text is excluded so rewording a message does not reset trending.
pub fn fingerprint_for_finding(finding: &Finding) -> String {
    let (path, pointer) = match &finding.location {
        Some(loc) => (loc.path.as_str(), loc.pointer.as_deref().unwrap_or("")),
        None => ("", ""),
    };
    let value = finding
        .data
        .get("value")
        .and_then(|v| v.as_str())
        .unwrap_or("");

    let canonical = [
        finding.check_id.as_str(),
        finding.code.as_str(),
        path,
        pointer,
        value,
    ]
    .join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}
