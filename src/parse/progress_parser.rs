use crate::model::progress::{CategorySection, ProgressRegion};

/// Parse the text between the progress markers into a region.
///
/// Lines are kept verbatim so that serializing an untouched region gives back
/// the exact input. A line starting with `## ` opens a category section; the
/// section runs until the next such line or the end of the region.
pub fn parse_region(text: &str) -> ProgressRegion {
    let mut parts: Vec<&str> = text.split('\n').collect();
    let head = parts.remove(0).to_string();
    let tail = if parts.is_empty() {
        None
    } else {
        parts.pop().map(|t| t.to_string())
    };

    let mut preamble = Vec::new();
    let mut sections: Vec<CategorySection> = Vec::new();

    for line in parts {
        if let Some(title) = heading_title(line) {
            sections.push(CategorySection {
                title: title.to_string(),
                header_line: line.to_string(),
                body: Vec::new(),
            });
            continue;
        }
        match sections.last_mut() {
            Some(section) => section.body.push(line.to_string()),
            None => preamble.push(line.to_string()),
        }
    }

    ProgressRegion {
        head,
        preamble,
        sections,
        tail,
    }
}

/// Title of a `## Title` heading line, or `None` for any other line
fn heading_title(line: &str) -> Option<&str> {
    line.strip_prefix("## ").map(|t| t.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_region() {
        let region = parse_region("\n## Arrays\n(none yet)\n\n## Stack\n(none yet)\n\n");
        assert_eq!(region.head, "");
        assert!(region.preamble.is_empty());
        assert_eq!(region.tail.as_deref(), Some(""));
        assert_eq!(region.sections.len(), 2);
        assert_eq!(region.sections[0].title, "Arrays");
        assert_eq!(region.sections[0].body, vec!["(none yet)", ""]);
        assert_eq!(region.sections[1].title, "Stack");
        assert_eq!(region.sections[1].body, vec!["(none yet)", ""]);
    }

    #[test]
    fn test_parse_preamble_and_entries() {
        let source = "\nSome notes first\n\n## Arrays\n- [x] [Two Sum](http://x) — `arrays/two_sum.py`\n- [ ] [Contains Duplicate](http://y) — `arrays/contains_duplicate.py`\n";
        let region = parse_region(source);
        assert_eq!(region.preamble, vec!["Some notes first", ""]);
        let arrays = region.section("Arrays").unwrap();
        let entries = arrays.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1.name, "Two Sum");
        assert!(entries[0].1.done);
        assert_eq!(entries[1].0, 1);
        assert!(!entries[1].1.done);
    }

    #[test]
    fn test_parse_heading_trailing_whitespace() {
        let region = parse_region("\n## Two Pointers  \n(none yet)\n");
        assert_eq!(region.sections[0].title, "Two Pointers");
        assert_eq!(region.sections[0].header_line, "## Two Pointers  ");
    }

    #[test]
    fn test_parse_region_without_newline() {
        let region = parse_region("");
        assert_eq!(region.head, "");
        assert_eq!(region.tail, None);
        assert!(region.sections.is_empty());

        let region = parse_region("stray");
        assert_eq!(region.head, "stray");
        assert_eq!(region.tail, None);
    }

    #[test]
    fn test_h1_and_h3_are_not_categories() {
        let region = parse_region("\n# Title\n### Sub\n## Real\n");
        assert_eq!(region.preamble, vec!["# Title", "### Sub"]);
        assert_eq!(region.sections.len(), 1);
        assert_eq!(region.sections[0].title, "Real");
    }
}
