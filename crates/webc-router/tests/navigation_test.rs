//! Integration tests for the application router

use futures::future::join_all;
use serde_json::json;
use std::sync::Arc;
use tokio::time::Duration;
use webc_core::RoutingConfig;
use webc_router::{AppRouter, ChannelConfigSource, RouterState};
use webc_router_core::{RouteMatch, StaticHostContext};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

fn routing_config() -> RoutingConfig {
    let document = json!({
        "baseURL": "http://localhost:8000/",
        "pages": [
            { "path": "", "src": "home", "tag": "home" },
            { "path": "about", "src": "about.html", "tag": "about" },
            {
                "path": "docs",
                "src": "docs",
                "children": [
                    { "path": "intro", "src": "intro", "tag": "intro" },
                    { "path": "api", "src": "https://cdn.example.com/api.html", "tag": "api" }
                ]
            }
        ],
        "pagesFallback": { "src": "404" }
    });
    RoutingConfig::from_json_str(&document.to_string()).unwrap()
}

#[tokio::test]
async fn test_requests_issued_before_ready_are_answered() {
    init_tracing();

    let router = Arc::new(AppRouter::new(Arc::new(StaticHostContext::new())));
    let (source, mut requests) = ChannelConfigSource::new();

    // Several collaborators ask before the configuration arrives
    let waiting: Vec<_> = (0..4)
        .map(|_| {
            let client = router.navigation();
            tokio::spawn(async move { client.get_tags().await })
        })
        .collect();

    let mounting = {
        let router = router.clone();
        tokio::spawn(async move { router.mount(&source).await })
    };

    let request = requests.recv().await.unwrap();
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(router.state(), RouterState::Resolving);

    request.respond(routing_config());
    assert_eq!(mounting.await.unwrap(), RouterState::Ready);

    for answer in join_all(waiting).await {
        let tags = answer.unwrap().unwrap();
        assert_eq!(tags["home"], "/");
        assert_eq!(tags["intro"], "/docs/intro");
        assert_eq!(tags["api"], "/docs/api");
    }
}

#[tokio::test]
async fn test_resolved_table_from_json_document() {
    init_tracing();

    let router = AppRouter::new(Arc::new(StaticHostContext::new()));
    let (source, mut requests) = ChannelConfigSource::new();

    tokio::spawn(async move {
        if let Some(request) = requests.recv().await {
            request.respond(routing_config());
        }
    });

    assert_eq!(router.mount(&source).await, RouterState::Ready);

    let table = router.route_table().unwrap();
    assert_eq!(table.root, "/");
    assert_eq!(table.pages().count(), 4);

    match table.route("/docs/api") {
        RouteMatch::Page(page) => assert_eq!(page.src, "https://cdn.example.com/api.html"),
        other => panic!("unexpected match: {:?}", other),
    }
    assert!(matches!(table.route("/nowhere"), RouteMatch::Fallback(f) if f.src == "./pages/404"));

    let routing = router.navigation().get_routing().await.unwrap();
    assert_eq!(routing.base_path, "");
    assert_eq!(routing.mapping["/about"], "about.html");
    assert_eq!(routing.mapping["/docs/intro"], "docs/intro");
}

#[tokio::test]
async fn test_rejected_configuration_keeps_router_resolving() {
    init_tracing();

    let router = AppRouter::new(Arc::new(StaticHostContext::new()));
    let (source, mut requests) = ChannelConfigSource::new();

    tokio::spawn(async move {
        if let Some(request) = requests.recv().await {
            request.reject("configuration unavailable");
        }
    });

    assert_eq!(router.mount(&source).await, RouterState::Resolving);
    assert!(router.route_table().is_none());
    assert!(router.navigation().try_get_tags().is_err());
}
