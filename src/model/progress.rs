use serde::Serialize;

/// One `## <Title>` category inside the progress region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    /// Title as written after `## `, trailing whitespace removed
    pub title: String,
    /// The heading line exactly as it appeared in the source
    pub header_line: String,
    /// Every line up to the next heading or the end of the region,
    /// entries, placeholder and blank lines alike
    pub body: Vec<String>,
}

impl CategorySection {
    pub fn new(title: &str, placeholder: &str) -> Self {
        let title = title.trim_end();
        CategorySection {
            title: title.to_string(),
            header_line: format!("## {}", title),
            body: vec![placeholder.to_string(), String::new()],
        }
    }

    /// Parsed entries of this section, with their body line index
    pub fn entries(&self) -> Vec<(usize, Entry)> {
        self.body
            .iter()
            .enumerate()
            .filter_map(|(i, line)| Entry::parse(line).map(|e| (i, e)))
            .collect()
    }

    /// Body index and done flag of the entry named exactly `name`.
    ///
    /// Compares against the rendered `- [ ] [<name>](` prefix rather than a
    /// parsed name, so names containing `](` still match themselves.
    pub fn find_entry(&self, name: &str) -> Option<(usize, bool)> {
        self.body.iter().enumerate().find_map(|(i, line)| {
            let (done, rest) = match line.strip_prefix("- [ ] [") {
                Some(rest) => (false, rest),
                None => (true, line.strip_prefix("- [x] [")?),
            };
            rest.strip_prefix(name)?.strip_prefix("](")?;
            Some((i, done))
        })
    }
}

/// The text between the start and end markers, split into lines.
///
/// `head` is whatever shares a line with the start marker (usually empty) and
/// `tail` whatever shares a line with the end marker. When the region holds no
/// newline at all the whole region is `head` and `tail` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRegion {
    pub head: String,
    /// Lines before the first category heading
    pub preamble: Vec<String>,
    pub sections: Vec<CategorySection>,
    pub tail: Option<String>,
}

impl ProgressRegion {
    /// Index of the section titled `title`. Trailing whitespace is ignored on
    /// both sides, the same way headings are read.
    pub fn section_index(&self, title: &str) -> Option<usize> {
        let title = title.trim_end();
        self.sections.iter().position(|s| s.title == title)
    }

    pub fn section(&self, title: &str) -> Option<&CategorySection> {
        self.section_index(title).map(|i| &self.sections[i])
    }

    /// All complete lines of the region, in order
    pub fn lines(&self) -> impl Iterator<Item = &String> {
        self.preamble.iter().chain(
            self.sections
                .iter()
                .flat_map(|s| std::iter::once(&s.header_line).chain(s.body.iter())),
        )
    }
}

/// A single problem line: `- [ ] [name](link) — `path``
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub done: bool,
    pub name: String,
    pub link: String,
    pub path: String,
}

impl Entry {
    /// Render as a checklist line
    pub fn to_line(&self) -> String {
        format!(
            "- {} [{}]({}) — `{}`",
            if self.done { "[x]" } else { "[ ]" },
            self.name,
            self.link,
            self.path
        )
    }

    /// Parse a checklist line. Returns `None` for anything that isn't an entry.
    ///
    /// The path label is optional so hand-written `- [ ] [name](link)` lines
    /// still count as entries.
    pub fn parse(line: &str) -> Option<Entry> {
        let rest = line.strip_prefix("- [")?;
        let mut chars = rest.chars();
        let done = match chars.next()? {
            ' ' => false,
            'x' => true,
            _ => return None,
        };
        let rest = chars.as_str().strip_prefix("] [")?;
        let name_end = rest.find("](")?;
        let name = &rest[..name_end];
        let after_name = &rest[name_end + 2..];
        let link_end = after_name.rfind(')')?;
        let (link, path) = match after_name.find(") — `") {
            Some(i) => {
                let label = &after_name[i + ") — `".len()..];
                (&after_name[..i], label.trim_end().trim_end_matches('`'))
            }
            None => (&after_name[..link_end], ""),
        };
        Some(Entry {
            done,
            name: name.to_string(),
            link: link.to_string(),
            path: path.to_string(),
        })
    }
}

/// What an upsert did to the target section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertOutcome {
    Inserted,
    Upgraded,
    Unchanged,
}

impl std::fmt::Display for UpsertOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpsertOutcome::Inserted => write!(f, "added"),
            UpsertOutcome::Upgraded => write!(f, "marked done"),
            UpsertOutcome::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Entry counts inside a progress region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressCounts {
    pub done: usize,
    pub total: usize,
}
