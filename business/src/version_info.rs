//! Version string shown in the page footer.

/// Formats the build version for display, e.g. `v0.1.0`.
pub fn format_version() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_version_has_prefix_and_digits() {
        let version = format_version();
        assert!(version.starts_with('v'));
        assert!(version[1..].chars().next().is_some_and(|c| c.is_ascii_digit()));
    }
}
