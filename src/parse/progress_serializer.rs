use crate::model::progress::ProgressRegion;

/// Serialize a region back to the text that sits between the markers.
/// Untouched lines are emitted verbatim, so parse → serialize is lossless.
pub fn serialize_region(region: &ProgressRegion) -> String {
    let Some(tail) = &region.tail else {
        return region.head.clone();
    };

    let mut out = region.head.clone();
    out.push('\n');
    for line in region.lines() {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(tail);
    out
}
