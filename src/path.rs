//! Slash-separated path helpers
//!
//! Paths handed to a [`FileSystem`](crate::fs::FileSystem) are plain strings using `/` as the
//! only separator, regardless of host platform. Everything that splits, joins or rebases those
//! strings goes through this module instead of ad hoc slicing.

/// Returns true if the path starts at the store root.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
}

/// Iterates the non-empty segments of a path. Leading, trailing and duplicate slashes
/// contribute nothing.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Last segment of the path, if any.
pub fn file_name(path: &str) -> Option<&str> {
    segments(path).last()
}

/// Cumulative prefixes of `path`, shortest first.
///
/// `"/a//b/c"` yields `["/a", "/a/b", "/a/b/c"]`; `"a/b"` yields `["a", "a/b"]`. The root
/// itself is never included.
pub fn prefixes(path: &str) -> Vec<String> {
    let mut current = if is_absolute(path) {
        String::from("/")
    } else {
        String::new()
    };
    let mut result = Vec::new();

    for segment in segments(path) {
        if !current.is_empty() && !current.ends_with('/') {
            current.push('/');
        }
        current.push_str(segment);
        result.push(current.clone());
    }

    result
}

/// Collapses duplicate slashes and resolves `.` and `..` lexically.
///
/// Absolute paths never climb above `/`. Relative paths keep leading `..` segments, and an
/// empty relative path becomes `"."`.
pub fn normalize(path: &str) -> String {
    let absolute = is_absolute(path);
    let mut stack: Vec<&str> = Vec::new();

    for segment in segments(path) {
        match segment {
            "." => {}
            ".." => match stack.last() {
                Some(&last) if last != ".." => {
                    stack.pop();
                }
                _ if absolute => {}
                _ => stack.push(".."),
            },
            other => stack.push(other),
        }
    }

    let joined = stack.join("/");
    if absolute {
        format!("/{}", joined)
    } else if joined.is_empty() {
        String::from(".")
    } else {
        joined
    }
}

/// Appends `rest` to `base`. An absolute `rest` replaces `base` entirely.
pub fn join(base: &str, rest: &str) -> String {
    if is_absolute(rest) || base.is_empty() {
        return rest.to_string();
    }
    if rest.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), rest)
}

/// Joins and normalizes in one step.
pub fn resolve(base: &str, rest: &str) -> String {
    normalize(&join(base, rest))
}

/// Directory containing `path`: `"/"` for top-level entries of an absolute path and `"."` for a
/// bare relative name.
pub fn parent(path: &str) -> String {
    let normalized = normalize(path);
    match normalized.rfind('/') {
        Some(0) => String::from("/"),
        Some(idx) => normalized[..idx].to_string(),
        None if normalized == ".." => String::from("../.."),
        None => String::from("."),
    }
}

/// Expresses `target` relative to `base`, climbing with `..` where the two diverge.
///
/// When one path is absolute and the other is not there is no common anchor inside a store, so
/// the normalized `target` is returned as is.
pub fn relative(base: &str, target: &str) -> String {
    let base = normalize(base);
    let target = normalize(target);
    if is_absolute(&base) != is_absolute(&target) {
        return target;
    }

    let base_parts: Vec<&str> = segments(&base).filter(|s| *s != ".").collect();
    let target_parts: Vec<&str> = segments(&target).filter(|s| *s != ".").collect();
    let common = base_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts = vec![".."; base_parts.len() - common];
    parts.extend_from_slice(&target_parts[common..]);
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        absolute = { "/a/b/c", &["/a", "/a/b", "/a/b/c"] },
        relative = { "a/b", &["a", "a/b"] },
        duplicate_slashes = { "//a//b/", &["/a", "/a/b"] },
        root_only = { "/", &[] },
        empty = { "", &[] },
    )]
    fn test_prefixes(path: &str, expected: &[&str]) {
        assert_eq!(prefixes(path), expected);
    }

    #[parameterized(
        dots = { "/a/./b/../c", "/a/c" },
        above_root = { "/../../a", "/a" },
        relative_parent = { "../a/..", ".." },
        empty_relative = { "a/..", "." },
        trailing_slash = { "/a/b/", "/a/b" },
        root = { "///", "/" },
    )]
    fn test_normalize(path: &str, expected: &str) {
        assert_eq!(normalize(path), expected);
    }

    #[parameterized(
        plain = { "/root", "a.txt", "/root/a.txt" },
        base_trailing_slash = { "/root/", "sub/b.txt", "/root/sub/b.txt" },
        absolute_rest = { "/root", "/other", "/other" },
        root_base = { "/", "a", "/a" },
        empty_rest = { "/root", "", "/root" },
    )]
    fn test_join(base: &str, rest: &str, expected: &str) {
        assert_eq!(join(base, rest), expected);
    }

    #[test]
    fn test_resolve_normalizes() {
        assert_eq!(resolve("/root/sub", "../a.txt"), "/root/a.txt");
        assert_eq!(resolve("/root", "./x//y"), "/root/x/y");
    }

    #[parameterized(
        nested = { "/a/b/c.txt", "/a/b" },
        top_level = { "/a.txt", "/" },
        root = { "/", "/" },
        bare_name = { "a.txt", "." },
        relative_nested = { "a/b", "a" },
    )]
    fn test_parent(path: &str, expected: &str) {
        assert_eq!(parent(path), expected);
    }

    #[parameterized(
        direct_child = { "/root", "/root/a.txt", "a.txt" },
        nested = { "/root", "/root/sub/b.txt", "sub/b.txt" },
        same = { "/root", "/root", "" },
        sibling = { "/root/x", "/root/y/z", "../y/z" },
        relative_paths = { "src", "src/lib/mod.rs", "lib/mod.rs" },
    )]
    fn test_relative(base: &str, target: &str, expected: &str) {
        assert_eq!(relative(base, target), expected);
    }

    #[test]
    fn test_relative_mixed_anchors_returns_target() {
        assert_eq!(relative("root", "/root/a"), "/root/a");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/a/b.txt"), Some("b.txt"));
        assert_eq!(file_name("/a/b/"), Some("b"));
        assert_eq!(file_name("/"), None);
    }
}
