/// Derives a URL slug from a title.
///
/// Lowercases the title, collapses every run of characters outside `[a-z0-9]` into a
/// single `-` and trims leading and trailing dashes. Non-ASCII letters are treated as
/// separators.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Picks the first slug not in `taken`: `base`, then `base-2`, `base-3`, …
pub fn unique_slug(base: &str, taken: &[String]) -> String {
    if !taken.iter().any(|s| s == base) {
        return base.to_string();
    }

    (2..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !taken.iter().any(|s| s == candidate))
        .unwrap_or_else(|| base.to_string())
}
