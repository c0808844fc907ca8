//! Cell-level formatting for the directory table.

use bounties_types::Reward;

/// shields.io badge for a reward.
pub fn badge_url(reward: Reward) -> &'static str {
    match reward {
        Reward::Bounty => "https://img.shields.io/badge/Cash-5dd21c?logo=cashapp&logoColor=fff",
        Reward::Recognition => {
            "https://img.shields.io/badge/Shout_out-fd00a6?logo=githubsponsors&logoColor=fff"
        }
        Reward::Swag => "https://img.shields.io/badge/Swag-fdc500?logo=apachespark&logoColor=000",
        Reward::Other => "https://img.shields.io/badge/Other-9e9e9e",
    }
}

/// Shorten a display name: drop `www.` and http(s) schemes, trailing slashes, then cap at
/// `max_len` characters followed by `...`.
pub fn short_name(name: &str, max_len: usize) -> String {
    let cleaned = name
        .replace("www.", "")
        .replace("http://", "")
        .replace("https://", "");
    let cleaned = cleaned.trim_end_matches('/');

    let mut chars = cleaned.chars();
    let head: String = chars.by_ref().take(max_len).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Link target for a contact. Bare email addresses become `mailto:` links.
pub fn contact_href(contact: &str) -> String {
    let contact = contact.trim();
    let has_scheme = contact.contains("://") || contact.to_ascii_lowercase().starts_with("mailto:");
    if !has_scheme && contact.contains('@') {
        format!("mailto:{contact}")
    } else {
        contact.to_string()
    }
}

/// Glyph shown before "Submit", chosen by link kind.
pub fn link_icon(href: &str) -> &'static str {
    let lower = href.to_ascii_lowercase();
    if lower.starts_with("mailto:") {
        "🖃"
    } else if lower.starts_with("http") {
        "🌐"
    } else if lower.starts_with("twitter") {
        "🐦"
    } else {
        ""
    }
}

/// Collapse every run of whitespace (line breaks included) into one space.
pub(crate) fn one_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text safe inside a Markdown table cell: no pipes breaking columns, no line breaks.
pub(crate) fn escape_cell(s: &str) -> String {
    one_line(s).replace('\\', "\\\\").replace('|', "\\|")
}

/// Link destination safe inside a table cell: characters that end the link or the cell
/// are percent-encoded.
pub(crate) fn escape_href(href: &str) -> String {
    let mut out = String::with_capacity(href.len());
    for c in href.chars() {
        match c {
            '|' => out.push_str("%7C"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            '\\' => out.push_str("%5C"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            c if c.is_whitespace() => out.push_str("%20"),
            c => out.push(c),
        }
    }
    out
}

/// Text safe inside a single-quoted HTML attribute or element body.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#x27;"),
            '"' => out.push_str("&quot;"),
            '|' => out.push_str("&#124;"),
            '\r' | '\n' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}
