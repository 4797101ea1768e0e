//! Symbol and filename derivation for generated sources.

pub const MAX_NAME_LENGTH: usize = 2048;

/// Last component of `path`, splitting on both `/` and `\`.
pub fn basename(path: &str) -> &str {
    match path.rfind(|c: char| c == '/' || c == '\\') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Upper-cased basename with `.` mapped to `_`, at most [`MAX_NAME_LENGTH`] bytes.
///
/// Only ASCII letters change case; other characters are copied as-is. Truncation never
/// splits a multi-byte character. Used verbatim as an include guard and, through
/// [`variable_name`], as the array identifier.
pub fn symbol_name(path: &str) -> String {
    let mut symbol = String::new();
    for c in basename(path).chars() {
        if symbol.len() + c.len_utf8() > MAX_NAME_LENGTH {
            break;
        }
        symbol.push(if c == '.' { '_' } else { c.to_ascii_uppercase() });
    }
    symbol
}

pub fn variable_name(symbol: &str) -> String {
    symbol.to_ascii_lowercase()
}

/// True when the text after the last `.` is exactly `h` or `hpp`.
pub fn is_header_file(path: &str) -> bool {
    match path.rfind('.') {
        Some(idx) => matches!(&path[idx..], ".h" | ".hpp"),
        None => false,
    }
}

/// Swaps the `h` right after the last `.` for `c` (`.h` -> `.c`, `.hpp` -> `.cpp`).
pub fn source_companion(path: &str) -> String {
    let mut name = path.to_string();
    if let Some(idx) = path.rfind('.') {
        if path[idx + 1..].starts_with('h') {
            name.replace_range(idx + 1..idx + 2, "c");
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_splits_on_both_separators() {
        assert_eq!(basename("assets/img/logo.png"), "logo.png");
        assert_eq!(basename("C:\\fw\\cert.der"), "cert.der");
        assert_eq!(basename("mixed/dir\\file.bin"), "file.bin");
        assert_eq!(basename("plain.bin"), "plain.bin");
        assert_eq!(basename("trailing/"), "");
    }

    #[test]
    fn symbol_is_uppercase_with_underscores() {
        assert_eq!(symbol_name("web/index.html.gz"), "INDEX_HTML_GZ");
        assert_eq!(symbol_name("./array.h"), "ARRAY_H");
        // non-alphanumerics other than '.' pass through
        assert_eq!(symbol_name("my-logo 2.png"), "MY-LOGO 2_PNG");
    }

    #[test]
    fn symbol_has_no_lowercase_or_dots() {
        for path in ["a.b.c", "Foo/Bar.Baz", "x\\y.z", "README"] {
            let symbol = symbol_name(path);
            assert!(!symbol.chars().any(|c| c.is_ascii_lowercase()), "{symbol}");
            assert!(!symbol.contains('.'), "{symbol}");
        }
    }

    #[test]
    fn variable_is_lowercase_of_symbol() {
        let symbol = symbol_name("img/Logo.PNG");
        assert_eq!(variable_name(&symbol), "logo_png");
        assert_eq!(variable_name(&symbol), symbol.to_ascii_lowercase());
    }

    #[test]
    fn non_ascii_passes_through_unchanged() {
        let symbol = symbol_name("img/straße.bin");
        assert_eq!(symbol, "STRAßE_BIN");
        assert_eq!(variable_name(&symbol), "straße_bin");
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "a".repeat(MAX_NAME_LENGTH + 100);
        assert_eq!(symbol_name(&long).len(), MAX_NAME_LENGTH);
    }

    #[test]
    fn truncation_counts_bytes_on_char_boundaries() {
        // 'é' is two bytes, so the limit falls mid-character after 1023 of them
        let long = format!("a{}", "é".repeat(MAX_NAME_LENGTH));
        let symbol = symbol_name(&long);
        assert_eq!(symbol.len(), MAX_NAME_LENGTH - 1);
        assert!(symbol.starts_with('A'));
    }

    #[test]
    fn header_detection() {
        assert!(is_header_file("foo.h"));
        assert!(is_header_file("./array.h"));
        assert!(is_header_file("include/foo.hpp"));
        assert!(!is_header_file("foo.c"));
        assert!(!is_header_file("foo.bin"));
        assert!(!is_header_file("foo.hh"));
        assert!(!is_header_file("noext"));
        assert!(!is_header_file("dir.h/file"));
    }

    #[test]
    fn companion_swaps_h_for_c() {
        assert_eq!(source_companion("foo.h"), "foo.c");
        assert_eq!(source_companion("foo.hpp"), "foo.cpp");
        assert_eq!(source_companion("./array.h"), "./array.c");
        assert_eq!(source_companion("gen.d/logo.hpp"), "gen.d/logo.cpp");
        assert_eq!(source_companion("foo.bin"), "foo.bin");
    }
}
