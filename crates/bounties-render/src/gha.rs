use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path}::[{check_id}:{code}] {message} ({pointer})`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        let level = match f.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Info => "notice",
        };

        let mut message = format!("[{}:{}] {}", f.check_id, f.code, f.message);
        let mut meta = String::new();
        if let Some(loc) = &f.location {
            meta.push_str(&format!("file={}", escape_property(&loc.path)));
            if let Some(ptr) = &loc.pointer {
                message.push_str(&format!(" ({ptr})"));
            }
        }
        let message = escape_data(&message);

        if meta.is_empty() {
            out.push(format!("::{}::{}", level, message));
        } else {
            out.push(format!("::{} {}::{}", level, meta, message));
        }
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
