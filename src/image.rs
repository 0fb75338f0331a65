//! Normalizes the image reference typed into a draft. Remote URLs and
//! inline `data:` URIs pass through unchanged; anything else is treated as a
//! file name under the static assets directory and rewritten to the
//! canonical `public/img/` path, stripping any prefix the author already
//! typed so the prefix is never duplicated.

use url::Url;

/// The canonical prefix for image assets bundled with the site.
pub const ASSETS_PREFIX: &str = "public/img/";

/// URL schemes that pass through normalization unchanged.
const REMOTE_SCHEMES: [&str; 3] = ["http", "https", "data"];

/// Normalizes a raw image reference. Empty input (after trimming) yields an
/// empty string, which the views render as "no thumbnail".
pub fn normalize(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    if is_remote(raw) {
        return raw.to_owned();
    }

    let name = strip_prefix_ignore_case(raw, ASSETS_PREFIX).unwrap_or(raw);
    let name = strip_prefix_ignore_case(name, "img/")
        .or_else(|| strip_prefix_ignore_case(name, "/img/"))
        .unwrap_or(name);
    let name = name.trim_start_matches('/');

    format!("{}{}", ASSETS_PREFIX, name)
}

/// Whether `raw` is an absolute `http(s)` URL or an inline `data:` URI.
/// Other schemes (and everything that fails to parse as an absolute URL) are
/// treated as local file names.
fn is_remote(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => REMOTE_SCHEMES.contains(&url.scheme()),
        Err(_) => false,
    }
}

/// Strips `prefix` from the front of `input`, ignoring ASCII case (authors
/// type `IMG/` and `img/` interchangeably). Returns `None` when the prefix
/// isn't there. The checked slice also covers a multi-byte character
/// straddling the prefix length.
fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    match input.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&input[prefix.len()..]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestCase {
        input: &'static str,
        wanted: &'static str,
    }

    fn normalize_test(test_case: &TestCase) {
        let result = normalize(test_case.input);
        assert_eq!(
            test_case.wanted, result,
            "wanted \"{}\"; found \"{}\"",
            test_case.wanted, result
        );
    }

    #[test]
    fn test_bare_file_name_gets_assets_prefix() {
        normalize_test(&TestCase {
            input: "photo.jpg",
            wanted: "public/img/photo.jpg",
        });
    }

    #[test]
    fn test_img_prefix_is_not_duplicated() {
        normalize_test(&TestCase {
            input: "img/photo.jpg",
            wanted: "public/img/photo.jpg",
        });
    }

    #[test]
    fn test_full_assets_prefix_is_not_duplicated() {
        normalize_test(&TestCase {
            input: "public/img/photo.jpg",
            wanted: "public/img/photo.jpg",
        });
    }

    #[test]
    fn test_leading_slashes_are_stripped() {
        normalize_test(&TestCase {
            input: "/img/photo.jpg",
            wanted: "public/img/photo.jpg",
        });
        normalize_test(&TestCase {
            input: "//photo.jpg",
            wanted: "public/img/photo.jpg",
        });
    }

    #[test]
    fn test_prefix_match_ignores_case() {
        normalize_test(&TestCase {
            input: "IMG/photo.jpg",
            wanted: "public/img/photo.jpg",
        });
    }

    #[test]
    fn test_absolute_url_passes_through() {
        normalize_test(&TestCase {
            input: "https://x.com/a.png",
            wanted: "https://x.com/a.png",
        });
        normalize_test(&TestCase {
            input: "http://x.com/a.png",
            wanted: "http://x.com/a.png",
        });
    }

    #[test]
    fn test_data_uri_passes_through() {
        normalize_test(&TestCase {
            input: "data:image/png;base64,iVBORw0KGgo=",
            wanted: "data:image/png;base64,iVBORw0KGgo=",
        });
    }

    #[test]
    fn test_empty_and_whitespace_input_yield_empty() {
        normalize_test(&TestCase {
            input: "",
            wanted: "",
        });
        normalize_test(&TestCase {
            input: "   ",
            wanted: "",
        });
    }

    #[test]
    fn test_input_is_trimmed() {
        normalize_test(&TestCase {
            input: "  photo.jpg  ",
            wanted: "public/img/photo.jpg",
        });
    }

    #[test]
    fn test_other_schemes_are_treated_as_file_names() {
        // `ftp://` is not in the remote set; it falls through to the assets
        // path like any other odd file name.
        normalize_test(&TestCase {
            input: "ftp://example.org/a.png",
            wanted: "public/img/ftp://example.org/a.png",
        });
    }
}
