//! Rendering for the README table and for CI surfaces (Markdown, GitHub annotations).

#![forbid(unsafe_code)]

mod format;
mod gha;
mod markdown;
mod model;
mod splice;
mod table;

pub use format::{badge_url, contact_href, link_icon, short_name};
pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
pub use splice::{Markers, SpliceError, splice_between_markers};
pub use table::{TABLE_HEADER, TableOptions, render_directory_table};
