use crate::format::{
    badge_url, contact_href, escape_cell, escape_href, escape_html, link_icon, one_line,
    short_name,
};
use bounties_types::Company;

pub const TABLE_HEADER: &str = "Company | Rewards | Submission | Notes\n---|---|---|---\n";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOptions {
    pub name_max_len: usize,
    /// No trailing slash; `/{host}` is appended.
    pub icon_service: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            name_max_len: 40,
            icon_service: "https://icon.horse/icon".to_string(),
        }
    }
}

/// Render the directory as a Markdown table, one row per company in authored order.
///
/// An empty directory renders as an empty string (no header).
pub fn render_directory_table(companies: &[Company], opts: &TableOptions) -> String {
    if companies.is_empty() {
        return String::new();
    }

    let mut out = String::from(TABLE_HEADER);
    for c in companies {
        out.push_str(&render_row(c, opts));
    }
    out
}

fn render_row(c: &Company, opts: &TableOptions) -> String {
    let host = c.host().unwrap_or_default();
    let icon = format!(
        "<img src='{}/{}' width='20' />",
        opts.icon_service,
        escape_html(&host)
    );

    let name = one_line(&c.company);
    let anchor = format!(
        "<a href='{}' title='{}'>{} {}</a>",
        escape_html(c.url.trim()),
        escape_html(&name),
        icon,
        escape_html(&short_name(&name, opts.name_max_len))
    );

    let badges: String = c
        .rewards()
        .iter()
        .map(|r| format!("![{}]({}) ", r, badge_url(*r)))
        .collect();

    let href = contact_href(&one_line(&c.contact));
    let icon = link_icon(&href);
    let href = escape_href(&href);
    let link = match icon {
        "" => format!("[Submit]({href})"),
        glyph => format!("[{glyph} Submit]({href})"),
    };

    let notes = c.notes.as_deref().map(escape_cell).unwrap_or_default();

    format!("{anchor} | {badges}| {link}| {notes}\n")
}
