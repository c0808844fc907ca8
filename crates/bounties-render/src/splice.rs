//! Replace the generated region of a README between two marker comments.

/// Comments bounding the generated table inside the README.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: "<!-- bounties-start -->".to_string(),
            end: "<!-- bounties-end -->".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpliceError {
    #[error("start marker not found: {0}")]
    MissingStart(String),
    #[error("end marker not found after start marker: {0}")]
    MissingEnd(String),
    #[error("end marker {end} appears before start marker {start}")]
    OutOfOrder { start: String, end: String },
}

/// Put `content` between the first start marker and the next end marker.
///
/// Everything outside the markers (markers included) is preserved byte-for-byte, so
/// applying the same content twice yields the same document.
pub fn splice_between_markers(
    document: &str,
    content: &str,
    markers: &Markers,
) -> Result<String, SpliceError> {
    let Some(start_at) = document.find(&markers.start) else {
        return Err(SpliceError::MissingStart(markers.start.clone()));
    };
    let body_at = start_at + markers.start.len();

    let Some(end_rel) = document[body_at..].find(&markers.end) else {
        if document[..start_at].contains(&markers.end) {
            return Err(SpliceError::OutOfOrder {
                start: markers.start.clone(),
                end: markers.end.clone(),
            });
        }
        return Err(SpliceError::MissingEnd(markers.end.clone()));
    };
    let end_at = body_at + end_rel;

    let mut out = String::with_capacity(document.len() + content.len());
    out.push_str(&document[..body_at]);
    out.push('\n');
    out.push_str(content);
    out.push_str(&document[end_at..]);
    Ok(out)
}
