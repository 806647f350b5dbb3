// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Allow-list predicates for untrusted strings and numbers.
//!
//! Every function here is pure and total: any input of the expected type
//! yields a boolean, nothing panics and nothing touches the filesystem or
//! network. Arguments are checked against the narrow set of characters with
//! shell or process-control meaning; paths additionally ban glob and history
//! characters and are walked for `..` escapes.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

/// Maximum accepted path length, in characters.
pub const MAX_PATH_LEN: usize = 4096;

/// Maximum accepted argument length, in characters.
pub const MAX_ARGUMENT_LEN: usize = 1024;

/// Maximum accepted URL length, in characters.
pub const MAX_URL_LEN: usize = 2048;

/// Maximum accepted interface/hostname length, in characters.
pub const MAX_INTERFACE_LEN: usize = 253;

/// Characters banned in process arguments.
const ARGUMENT_METACHARS: &[char] = &[
    ';', '&', '|', '`', '$', '(', ')', '{', '}', '[', ']', '<', '>',
];

/// Characters banned in paths: the argument set plus glob, history and
/// home-expansion characters.
const PATH_METACHARS: &[char] = &[
    ';', '&', '|', '`', '$', '(', ')', '{', '}', '[', ']', '<', '>', '!', '#', '*', '?', '~',
];

static HOSTNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
    )
    .expect("hostname pattern is valid")
});

static IPV4_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}$").expect("ipv4 pattern is valid"));

static IPV6_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-fA-F0-9:]+$").expect("ipv6 pattern is valid"));

/// Returns true if `path` is safe to hand to a generator as a filesystem path.
///
/// Rejects empty and over-long input, NUL bytes, shell metacharacters, and
/// any path whose `..` segments would climb above the point where the walk
/// started. Segments are split on both `/` and `\`; `.` and empty segments
/// do not change depth. Absolute paths are accepted.
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || path.chars().count() > MAX_PATH_LEN {
        return false;
    }
    if path.contains('\0') || path.contains(PATH_METACHARS) {
        return false;
    }

    let mut depth: usize = 0;
    for segment in path.split(['/', '\\']) {
        match segment {
            ".." => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            "." | "" => {}
            _ => depth += 1,
        }
    }

    true
}

/// Returns true if `arg` is safe to pass as a single process argument.
///
/// Only NUL and direct shell-control characters are banned; glob and history
/// characters are allowed because arguments never pass through a shell.
pub fn is_valid_argument(arg: &str) -> bool {
    arg.chars().count() <= MAX_ARGUMENT_LEN
        && !arg.contains('\0')
        && !arg.contains(ARGUMENT_METACHARS)
}

/// Returns true if `url` parses and uses the `http` or `https` scheme.
pub fn is_valid_url(url: &str) -> bool {
    if url.chars().count() > MAX_URL_LEN {
        return false;
    }
    match url::Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Returns true if `port` is in `1..=65535`.
pub fn is_valid_port(port: i64) -> bool {
    (1..=65535).contains(&port)
}

/// Port check for untyped (JSON) input.
///
/// Strings such as `"80"` and fractional numbers such as `3.5` are rejected.
/// Integral floats (`8080.0`) are accepted since JSON does not distinguish them.
pub fn is_valid_port_value(value: &serde_json::Value) -> bool {
    port_from_value(value).is_some()
}

/// Extracts a valid port from untyped input, if it is one.
pub fn port_from_value(value: &serde_json::Value) -> Option<u16> {
    let serde_json::Value::Number(number) = value else {
        return None;
    };
    let port = if let Some(i) = number.as_i64() {
        i
    } else {
        let f = number.as_f64()?;
        if f.fract() != 0.0 || !f.is_finite() {
            return None;
        }
        f as i64
    };
    if is_valid_port(port) {
        u16::try_from(port).ok()
    } else {
        None
    }
}

/// Returns true if `iface` is a bindable interface name.
///
/// Accepts `localhost`, RFC-1123 style hostnames, dotted-quad IPv4 and a
/// permissive IPv6 character class.
pub fn is_valid_interface(iface: &str) -> bool {
    if iface.chars().count() > MAX_INTERFACE_LEN {
        return false;
    }
    iface == "localhost"
        || HOSTNAME_PATTERN.is_match(iface)
        || IPV4_PATTERN.is_match(iface)
        || IPV6_PATTERN.is_match(iface)
}

/// Checks a binary name before it is handed to process creation.
///
/// The binary must be resolvable through the executable search path: path
/// separators are refused outright, and the remaining name must be non-empty
/// and pass the argument allow-list.
pub fn check_binary(binary: &str) -> Result<(), ValidationError> {
    if binary.contains(['/', '\\']) {
        return Err(ValidationError::BinaryPath);
    }
    if binary.is_empty() || !is_valid_argument(binary) {
        return Err(ValidationError::BinaryName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- is_valid_path ---

    #[test]
    fn path_accepts_plain_relative_and_absolute() {
        assert!(is_valid_path("content/blog"));
        assert!(is_valid_path("/var/www/site"));
        assert!(is_valid_path("./site"));
        assert!(is_valid_path("my site/posts-2024.md"));
        assert!(is_valid_path("C:\\Users\\me\\site"));
    }

    #[test]
    fn path_rejects_empty_and_overlong() {
        assert!(!is_valid_path(""));
        assert!(is_valid_path(&"a".repeat(MAX_PATH_LEN)));
        assert!(!is_valid_path(&"a".repeat(MAX_PATH_LEN + 1)));
    }

    #[test]
    fn path_rejects_nul() {
        assert!(!is_valid_path("site\0/etc/passwd"));
    }

    #[test]
    fn path_rejects_each_metachar() {
        for c in PATH_METACHARS {
            let path = format!("site{c}name");
            assert!(!is_valid_path(&path), "should reject {path:?}");
        }
    }

    #[test]
    fn path_traversal_depth() {
        assert!(!is_valid_path("a/b/../../.."));
        assert!(is_valid_path("a/../b"));
        assert!(!is_valid_path("../.."));
        assert!(!is_valid_path(".."));
        assert!(!is_valid_path("../site"));
        assert!(is_valid_path("a/b/../c/../d"));
        assert!(is_valid_path("a/./././.."));
        assert!(!is_valid_path("/.."));
    }

    #[test]
    fn path_traversal_counts_backslash_segments() {
        assert!(!is_valid_path("..\\..\\windows"));
        assert!(is_valid_path("a\\..\\b"));
    }

    #[test]
    fn path_rejects_at_first_escape_even_if_later_balanced() {
        // Depth goes negative before the trailing segments could compensate.
        assert!(!is_valid_path("../a/b/c"));
        assert!(!is_valid_path("a/../../b/c/d"));
    }

    // --- is_valid_argument ---

    #[test]
    fn argument_accepts_flags_and_glob_chars() {
        assert!(is_valid_argument("--base-url"));
        assert!(is_valid_argument("https://example.com/x?y=1#top"));
        assert!(is_valid_argument("*.md"));
        assert!(is_valid_argument("~/site"));
        assert!(is_valid_argument(""));
    }

    #[test]
    fn argument_rejects_each_metachar() {
        for c in ARGUMENT_METACHARS {
            let arg = format!("value{c}rm");
            assert!(!is_valid_argument(&arg), "should reject {arg:?}");
        }
    }

    #[test]
    fn argument_rejects_nul_and_overlong() {
        assert!(!is_valid_argument("a\0b"));
        assert!(is_valid_argument(&"a".repeat(MAX_ARGUMENT_LEN)));
        assert!(!is_valid_argument(&"a".repeat(MAX_ARGUMENT_LEN + 1)));
    }

    // --- is_valid_url ---

    #[test]
    fn url_accepts_http_and_https() {
        assert!(is_valid_url("https://example.com/x"));
        assert!(is_valid_url("http://localhost:1111"));
    }

    #[test]
    fn url_rejects_other_schemes_and_garbage() {
        assert!(!is_valid_url("javascript:alert(1)"));
        assert!(!is_valid_url("ftp://host"));
        assert!(!is_valid_url("file:///etc/passwd"));
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn url_rejects_overlong() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LEN));
        assert!(!is_valid_url(&url));
    }

    // --- is_valid_port ---

    #[test]
    fn port_bounds() {
        assert!(!is_valid_port(0));
        assert!(!is_valid_port(65536));
        assert!(!is_valid_port(-80));
        assert!(is_valid_port(1));
        assert!(is_valid_port(65535));
    }

    #[test]
    fn port_value_rejects_non_integers_and_strings() {
        use serde_json::json;

        assert!(!is_valid_port_value(&json!(3.5)));
        assert!(!is_valid_port_value(&json!("80")));
        assert!(!is_valid_port_value(&json!(null)));
        assert!(!is_valid_port_value(&json!(true)));
        assert!(!is_valid_port_value(&json!(0)));
        assert!(!is_valid_port_value(&json!(65536)));
        assert!(is_valid_port_value(&json!(1)));
        assert!(is_valid_port_value(&json!(65535)));
        assert_eq!(port_from_value(&json!(8080.0)), Some(8080));
    }

    // --- is_valid_interface ---

    #[test]
    fn interface_accepts_hosts_and_addresses() {
        assert!(is_valid_interface("localhost"));
        assert!(is_valid_interface("127.0.0.1"));
        assert!(is_valid_interface("0.0.0.0"));
        assert!(is_valid_interface("my-host.example.com"));
        assert!(is_valid_interface("::1"));
        assert!(is_valid_interface("fe80::1"));
    }

    #[test]
    fn interface_rejects_injection_and_overlong() {
        assert!(!is_valid_interface(""));
        assert!(!is_valid_interface("host;rm"));
        assert!(!is_valid_interface("-leading-dash"));
        assert!(!is_valid_interface("host name"));
        assert!(!is_valid_interface(&"a".repeat(MAX_INTERFACE_LEN + 1)));
    }

    // --- check_binary ---

    #[test]
    fn binary_with_separator_is_a_path() {
        assert_eq!(check_binary("/bin/sh"), Err(ValidationError::BinaryPath));
        assert_eq!(check_binary("..\\evil.exe"), Err(ValidationError::BinaryPath));
    }

    #[test]
    fn binary_with_metachar_is_rejected() {
        assert_eq!(check_binary("ls; rm -rf"), Err(ValidationError::BinaryName));
        assert_eq!(check_binary(""), Err(ValidationError::BinaryName));
        assert!(check_binary("zola").is_ok());
    }

    // --- properties ---

    proptest! {
        #[test]
        fn nul_is_always_rejected(prefix in ".{0,40}", suffix in ".{0,40}") {
            let s = format!("{prefix}\0{suffix}");
            prop_assert!(!is_valid_path(&s));
            prop_assert!(!is_valid_argument(&s));
        }

        #[test]
        fn validators_are_pure(s in ".{0,80}") {
            prop_assert_eq!(is_valid_path(&s), is_valid_path(&s));
            prop_assert_eq!(is_valid_argument(&s), is_valid_argument(&s));
            prop_assert_eq!(is_valid_url(&s), is_valid_url(&s));
            prop_assert_eq!(is_valid_interface(&s), is_valid_interface(&s));
        }

        #[test]
        fn descending_paths_are_accepted(segments in prop::collection::vec("[a-z0-9_-]{1,8}", 1..8)) {
            let path = segments.join("/");
            prop_assert!(is_valid_path(&path));
        }

        #[test]
        fn ascending_past_root_is_rejected(
            segments in prop::collection::vec("[a-z0-9_-]{1,8}", 0..6),
            extra in 1usize..4,
        ) {
            let ups = vec![".."; segments.len() + extra];
            let path = format!("{}/{}", segments.join("/"), ups.join("/"));
            prop_assert!(!is_valid_path(&path));
        }

        #[test]
        fn every_port_in_range_is_valid(port in 1i64..=65535) {
            prop_assert!(is_valid_port(port));
        }
    }
}
