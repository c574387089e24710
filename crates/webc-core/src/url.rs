//! URL path helpers
//!
//! `join` concatenates path segments with exactly one `/` between non-empty
//! pieces. A trailing `/` on the last non-empty input is kept, the same way a
//! URL pathname keeps it, so `join("/app", &["/"])` is `/app/`. When every
//! input is empty the result is the empty string, which lets callers tell
//! "no path at all" apart from the root.

use webc_types::{WebcError, WebcResult};

/// Result of a join, shaped like a URL so callers read `.pathname`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedPath {
    pub pathname: String,
}

/// Join a base and any number of segments into one pathname
pub fn join<S: AsRef<str>>(base: &str, segments: &[S]) -> JoinedPath {
    let mut pathname = String::new();
    let mut trailing = false;

    for part in std::iter::once(base).chain(segments.iter().map(|s| s.as_ref())) {
        if part.is_empty() {
            continue;
        }
        trailing = part.ends_with('/');
        for piece in part.split('/').filter(|piece| !piece.is_empty()) {
            pathname.push('/');
            pathname.push_str(piece);
        }
    }

    if trailing {
        pathname.push('/');
    }

    JoinedPath { pathname }
}

/// Remove one trailing `/`, if present
pub fn trim_end(path: &str) -> String {
    path.strip_suffix('/').unwrap_or(path).to_string()
}

/// Pathname component of an absolute URL
pub fn pathname_of(url: &str) -> WebcResult<String> {
    let parsed = ::url::Url::parse(url)
        .map_err(|e| WebcError::InvalidUrl(format!("{}: {}", url, e)))?;
    Ok(parsed.path().to_string())
}

/// Base path of the application: the URL's pathname without its trailing `/`
pub fn base_path_from_url(base_url: &str) -> WebcResult<String> {
    Ok(trim_end(&pathname_of(base_url)?))
}
