/// File-name slug for a problem name: lowercase, spaces and hyphens become
/// underscores, apostrophes are dropped.
pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(' ', "_")
        .replace('-', "_")
        .replace('\'', "")
}

/// Title-case a string: the first letter of every run of letters is
/// uppercased and the rest of the run lowercased. Non-letters start a new run,
/// so `1d dp` becomes `1D Dp`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Heading title for a category directory name: `two_pointers` → `Two Pointers`
pub fn category_title(category: &str) -> String {
    title_case(&category.replace('_', " "))
}
