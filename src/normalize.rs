/// Collapse text to a whitespace-insensitive canonical form.
///
/// Lines are trimmed of leading/trailing whitespace, blank lines dropped,
/// and the remainder rejoined with single newlines. Two files are "in sync"
/// iff their canonical forms are identical. Comparison only; the canonical
/// form is never written back to disk.
pub fn normalize(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
