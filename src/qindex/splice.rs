use crate::error::{QindexError, Result};

pub const GEN_START: &str = "<!-- GENERATED:START -->";
pub const GEN_END: &str = "<!-- GENERATED:END -->";

/// Replaces the marker-delimited region of `document` with `fragment`.
///
/// Both markers must occur exactly once, start before end. Everything before the
/// start marker and after the end marker is returned unchanged.
pub fn splice(document: &str, fragment: &str) -> Result<String> {
    let start = find_once(document, GEN_START)?;
    let end = find_once(document, GEN_END)?;
    let (Some(start), Some(end)) = (start, end) else {
        return Err(QindexError::MissingMarkers);
    };
    if end < start {
        return Err(QindexError::MarkersOutOfOrder);
    }

    let before = &document[..start];
    let after = &document[end + GEN_END.len()..];

    let mut out = String::with_capacity(document.len() + fragment.len());
    out.push_str(before);
    out.push_str(GEN_START);
    out.push_str("\n\n");
    out.push_str(fragment);
    out.push('\n');
    out.push_str(GEN_END);
    out.push_str(after);
    Ok(out)
}

fn find_once(document: &str, marker: &'static str) -> Result<Option<usize>> {
    let mut matches = document.match_indices(marker).map(|(i, _)| i);
    let first = matches.next();
    if matches.next().is_some() {
        return Err(QindexError::DuplicateMarker(marker));
    }
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    const README: &str = "# Title\n\nIntro text.\n\n<!-- GENERATED:START -->\nold stuff\n<!-- GENERATED:END -->\n\n## Footer\n";

    #[test]
    fn test_replaces_region() {
        let out = splice(README, "## Questions\n").unwrap();
        assert_eq!(
            out,
            "# Title\n\nIntro text.\n\n<!-- GENERATED:START -->\n\n## Questions\n\n<!-- GENERATED:END -->\n\n## Footer\n"
        );
    }

    #[test]
    fn test_preserves_outside_text() {
        let out = splice(README, "anything\n").unwrap();
        let start = README.find(GEN_START).unwrap();
        let end = README.find(GEN_END).unwrap() + GEN_END.len();
        assert!(out.starts_with(&README[..start]));
        assert!(out.ends_with(&README[end..]));
    }

    #[test]
    fn test_idempotent() {
        let once = splice(README, "## Questions\n\n### A\n").unwrap();
        let twice = splice(&once, "## Questions\n\n### A\n").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_adjacent_markers() {
        let out = splice("a<!-- GENERATED:START --><!-- GENERATED:END -->b", "x\n").unwrap();
        assert_eq!(
            out,
            "a<!-- GENERATED:START -->\n\nx\n\n<!-- GENERATED:END -->b"
        );
    }

    #[test]
    fn test_missing_end_marker() {
        let err = splice("<!-- GENERATED:START -->\n", "x\n").unwrap_err();
        assert!(matches!(err, QindexError::MissingMarkers));
    }

    #[test]
    fn test_missing_both_markers() {
        let err = splice("# Plain readme\n", "x\n").unwrap_err();
        assert!(matches!(err, QindexError::MissingMarkers));
    }

    #[test]
    fn test_duplicate_marker() {
        let doc = format!("{GEN_START}\n{GEN_END}\n{GEN_END}\n");
        let err = splice(&doc, "x\n").unwrap_err();
        assert!(matches!(err, QindexError::DuplicateMarker(GEN_END)));
    }

    #[test]
    fn test_markers_out_of_order() {
        let doc = format!("{GEN_END}\n{GEN_START}\n");
        let err = splice(&doc, "x\n").unwrap_err();
        assert!(matches!(err, QindexError::MarkersOutOfOrder));
    }
}
