//! Skin stylesheets
//!
//! The default skin stylesheet is always linked; a custom skin adds a second
//! stylesheet after it so its rules take precedence. Hrefs are relative to
//! the document (no leading `/`).

use serde::{Deserialize, Serialize};
use webc_core::url::join;
use webc_core::DEFAULT_SKIN;

use crate::types::{ASSETS_PATH, SKIN_CSS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinStylesheets {
    /// Always present
    pub default_href: String,

    /// Present for any skin other than the default one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_href: Option<String>,
}

impl SkinStylesheets {
    pub fn resolve(base_path: &str, skin: &str, skin_path: &str) -> Self {
        let default_href = relative_href(base_path, &[ASSETS_PATH, SKIN_CSS]);
        let custom_href = (skin != DEFAULT_SKIN)
            .then(|| relative_href(base_path, &[skin_path, ASSETS_PATH, SKIN_CSS]));

        Self {
            default_href,
            custom_href,
        }
    }
}

fn relative_href(base_path: &str, segments: &[&str]) -> String {
    let pathname = join(base_path, segments).pathname;
    pathname.strip_prefix('/').unwrap_or(&pathname).to_string()
}
