// SPDX-FileCopyrightText: 2026 Sparkle Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lexical path resolution against a base directory.

use crate::validate::is_valid_path;

/// Resolves `user_path` against `base_path` and normalizes the separators.
///
/// Returns `None` if `user_path` fails [`is_valid_path`]. Absolute user paths
/// are kept as-is; relative ones are joined onto `base_path`. The result uses
/// `/` separators only, has no repeated separators, no `/./` segments and no
/// trailing `/.`.
///
/// Containment under `base_path` rests on the traversal-depth walk of the
/// raw `user_path`: a relative path that never climbs above its own start
/// cannot climb above anything it is appended to. The joined result is not
/// walked again, and `..` segments are preserved rather than resolved.
pub fn sanitize_path(base_path: &str, user_path: &str) -> Option<String> {
    if !is_valid_path(user_path) {
        return None;
    }

    let resolved = if user_path.starts_with('/') {
        user_path.to_string()
    } else {
        format!("{base_path}/{user_path}")
    };

    Some(normalize_separators(&resolved))
}

/// `/./` is collapsed to a fixed point before the trailing `/.` is stripped,
/// so `a/./.` becomes `a` rather than `a/.`.
fn normalize_separators(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        let c = if c == '\\' { '/' } else { c };
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }

    while out.contains("/./") {
        out = out.replace("/./", "/");
    }
    if let Some(stripped) = out.strip_suffix("/.") {
        out = stripped.to_string();
    }

    out
}
