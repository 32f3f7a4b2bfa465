//! Relative specifier resolution and path canonicalization.
//!
//! Resolution is textual: it operates on slash-separated path strings
//! and never touches the filesystem. The analyzed set is the only
//! universe of paths that exists.

use weft_core::errors::ExtractError;

/// Canonicalize a slash-separated path: empty and `.` segments are
/// dropped, `..` pops the last kept segment. Popping past the root is
/// a no-op, so `../../x` from the top level canonicalizes to `x`.
pub fn canonicalize(path: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                kept.pop();
            }
            other => kept.push(other),
        }
    }
    kept.join("/")
}

/// Directory portion of a slash-separated path; empty for bare names.
pub(crate) fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Resolve an import specifier against the file that contains it.
///
/// Returns `Ok(Some(canonical))` for relative specifiers (`./`, `../`),
/// `Ok(None)` for bare or absolute specifiers (passed through and
/// classified external downstream), and `Err` when a relative specifier
/// resolves to nothing at all.
pub fn resolve_specifier(
    specifier: &str,
    from: &str,
    line: usize,
) -> Result<Option<String>, ExtractError> {
    if !specifier.starts_with("./") && !specifier.starts_with("../") {
        return Ok(None);
    }

    let dir = parent_dir(from);
    let joined = if dir.is_empty() {
        specifier.to_string()
    } else {
        format!("{dir}/{specifier}")
    };

    let resolved = canonicalize(&joined);
    if resolved.is_empty() {
        return Err(ExtractError::MalformedSpecifier {
            path: from.to_string(),
            specifier: specifier.to_string(),
            line,
        });
    }
    Ok(Some(resolved))
}
