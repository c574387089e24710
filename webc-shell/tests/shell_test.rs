//! Integration tests for the application shell

use std::path::Path;
use tempfile::TempDir;
use webc_core::ShellConfig;
use webc_router::RouterState;
use webc_shell::{LocationOutcome, Shell, ShellError};

const WEBCARDINAL_JSON: &str = r#"{
    "baseURL": "http://localhost:8000/",
    "skin": "dark",
    "pages": [
        { "path": "", "src": "home", "tag": "home" },
        { "path": "about", "src": "about", "tag": "about" },
        {
            "path": "docs",
            "src": "docs",
            "children": [
                { "path": "intro", "src": "intro", "tag": "intro" }
            ]
        }
    ],
    "pagesFallback": { "src": "404", "loader": "iframe" }
}"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

fn write_config(dir: &Path, contents: &str) -> ShellConfig {
    let path = dir.join("webcardinal.json");
    std::fs::write(&path, contents).unwrap();
    ShellConfig {
        config_path: path,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_shell_resolves_location() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let config = ShellConfig {
        location: "/docs/intro".to_string(),
        ..write_config(dir.path(), WEBCARDINAL_JSON)
    };

    let shell = Shell::new(config);
    let report = shell.run().await.unwrap();

    assert_eq!(shell.state(), RouterState::Ready);
    assert_eq!(
        report.outcome,
        LocationOutcome::Page {
            src: "./pages/docs/intro".to_string()
        }
    );
    assert_eq!(report.table.pages().count(), 3);

    let sheets = report.stylesheets.unwrap();
    assert_eq!(sheets.default_href, "assets/skin.css");
    assert_eq!(sheets.custom_href.as_deref(), Some("skins/dark/assets/skin.css"));

    let tags = shell.navigation().get_tags().await.unwrap();
    assert_eq!(tags["about"], "/about");
}

#[tokio::test]
async fn test_shell_unknown_location_hits_fallback() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let config = ShellConfig {
        location: "/missing".to_string(),
        ..write_config(dir.path(), WEBCARDINAL_JSON)
    };

    let report = Shell::new(config).run().await.unwrap();
    assert_eq!(
        report.outcome,
        LocationOutcome::Fallback {
            src: "./pages/404".to_string()
        }
    );
    assert_eq!(report.table.fallback.unwrap().loader, "iframe");
}

#[tokio::test]
async fn test_shell_landing_page_redirects() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let config = ShellConfig {
        landing_page: Some("about".to_string()),
        ..write_config(dir.path(), WEBCARDINAL_JSON)
    };

    let report = Shell::new(config).run().await.unwrap();
    assert_eq!(
        report.outcome,
        LocationOutcome::Redirect {
            to: "/about".to_string()
        }
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["outcome"]["kind"], "redirect");
    assert_eq!(json["table"]["entries"][0]["kind"], "redirect");
}

#[tokio::test]
async fn test_shell_missing_config_not_ready() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let config = ShellConfig {
        config_path: dir.path().join("absent.json"),
        ..Default::default()
    };

    let shell = Shell::new(config);
    let result = shell.run().await;

    assert!(matches!(result, Err(ShellError::NotReady(RouterState::Resolving))));
    assert!(shell.navigation().try_get_routing().is_err());
}

#[test]
fn test_config_from_environment_lookup() {
    let config = ShellConfig::from_lookup(|key| match key {
        "WEBC_CONFIG" => Some("site/webcardinal.json".to_string()),
        "WEBC_LANDING_PAGE" => Some("welcome".to_string()),
        "WEBC_EMBED_BASE_URL" => Some("   ".to_string()),
        _ => None,
    });

    assert_eq!(config.config_path, Path::new("site/webcardinal.json"));
    assert_eq!(config.location, "/");
    assert_eq!(config.landing_page.as_deref(), Some("welcome"));
    assert_eq!(config.embedded_base_url, None);
    assert_eq!(config.pages_path, "/pages");
}
