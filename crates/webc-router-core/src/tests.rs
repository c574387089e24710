//! Resolution properties and end-to-end table scenarios

use proptest::prelude::*;
use webc_types::{RedirectRoute, RouteEntry, RouteSpec, TagIndex};

use crate::{
    resolve, resolve_landing_page, HostContext, RouteTable, RouteTreeResolver, StaticHostContext,
    PAGES_PATH,
};

fn segment() -> impl Strategy<Value = String> {
    "[a-z]{0,4}"
}

fn leaf() -> impl Strategy<Value = RouteSpec> {
    (segment(), segment(), proptest::option::of("t[0-2]")).prop_map(|(path, src, tag)| RouteSpec {
        path,
        src,
        tag,
        ..Default::default()
    })
}

fn tree() -> impl Strategy<Value = Vec<RouteSpec>> {
    let node = leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            leaf(),
            (segment(), segment(), prop::collection::vec(inner, 0..4))
                .prop_map(|(path, src, children)| RouteSpec::group(path, src, children)),
        ]
    });
    prop::collection::vec(node, 0..5)
}

fn pages_prefix() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(PAGES_PATH), Just("/pages/"), Just("pages"), Just("/"), Just("")]
}

fn base_path() -> impl Strategy<Value = String> {
    "(/[a-z]{1,5}){0,2}"
}

/// Logical path of every leaf, in pre-order, computed independently
fn expected_leaves<'a>(routes: &'a [RouteSpec], ancestors: &[&'a str], out: &mut Vec<(String, &'a RouteSpec)>) {
    for node in routes {
        let mut segments = ancestors.to_vec();
        segments.push(&node.path);

        match &node.children {
            Some(children) => expected_leaves(children, &segments, out),
            None => {
                let pieces: Vec<&str> = segments.into_iter().filter(|s| !s.is_empty()).collect();
                out.push((format!("/{}", pieces.join("/")), node));
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_flat_routes_one_entry_each_in_order(routes in prop::collection::vec(leaf(), 0..8)) {
        let result = resolve(&routes, "", PAGES_PATH).unwrap();

        prop_assert_eq!(result.entries.len(), routes.len());
        for (entry, route) in result.entries.iter().zip(&routes) {
            let expected = if route.path.is_empty() { "/".to_string() } else { format!("/{}", route.path) };
            prop_assert_eq!(&entry.route_path, &expected);
        }
    }

    #[test]
    fn prop_leaf_path_joins_ancestors(routes in tree(), base in base_path()) {
        let result = resolve(&routes, &base, PAGES_PATH).unwrap();

        let mut expected = Vec::new();
        expected_leaves(&routes, &[], &mut expected);

        prop_assert_eq!(result.entries.len(), expected.len());
        for (entry, (route_path, _)) in result.entries.iter().zip(&expected) {
            prop_assert_eq!(&entry.route_path, route_path);
            prop_assert!(!entry.path.contains("//"));
            prop_assert!(entry.path.starts_with(&base));
        }
    }

    #[test]
    fn prop_root_coercion(base in base_path(), src in segment()) {
        let result = resolve(&[RouteSpec::leaf("", src)], &base, PAGES_PATH).unwrap();
        prop_assert_eq!(result.entries.len(), 1);
        prop_assert_eq!(&result.entries[0].path, &format!("{}/", base));
    }

    #[test]
    fn prop_mapping_never_starts_with_pages_prefix(
        routes in tree(),
        base in base_path(),
        prefix in pages_prefix(),
    ) {
        let result = resolve(&routes, &base, prefix).unwrap();
        for value in result.path_mapping.values() {
            prop_assert!(!value.starts_with(PAGES_PATH), "mapping value {:?}", value);
            prop_assert!(!value.starts_with("./"), "mapping value {:?}", value);
            prop_assert!(!value.starts_with('/'), "mapping value {:?}", value);
        }
    }

    #[test]
    fn prop_last_tag_wins(routes in tree()) {
        let result = resolve(&routes, "", PAGES_PATH).unwrap();

        let mut expected_leaves_list = Vec::new();
        expected_leaves(&routes, &[], &mut expected_leaves_list);

        let mut expected = TagIndex::new();
        for (route_path, node) in expected_leaves_list {
            if let Some(tag) = &node.tag {
                expected.insert(tag.clone(), route_path);
            }
        }
        prop_assert_eq!(result.tag_index, expected);
    }

    #[test]
    fn prop_resolve_is_idempotent(routes in tree(), base in base_path()) {
        let resolver = RouteTreeResolver::new(base, PAGES_PATH).unwrap();
        prop_assert_eq!(resolver.resolve(&routes), resolver.resolve(&routes));
    }
}

#[test]
fn test_scenario_home_and_about() {
    let routes = vec![RouteSpec::leaf("", "home"), RouteSpec::leaf("about", "about")];
    let result = resolve(&routes, "", "/pages").unwrap();

    let entries: Vec<_> = result
        .entries
        .iter()
        .map(|e| (e.path.as_str(), e.src.as_str()))
        .collect();
    assert_eq!(entries, vec![("/", "./pages/home"), ("/about", "./pages/about")]);

    let mapping: Vec<_> = result
        .path_mapping
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(mapping, vec![("/", "home"), ("/about", "about")]);
}

#[test]
fn test_scenario_nested_docs() {
    let routes = vec![RouteSpec::group("docs", "docs", vec![RouteSpec::leaf("intro", "intro")])];
    let result = resolve(&routes, "", PAGES_PATH).unwrap();

    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].path, "/docs/intro");
    assert_eq!(result.entries[0].src, "./pages/docs/intro");
}

#[test]
fn test_scenario_embedded_redirect_precedes_root() {
    let host = StaticHostContext::new()
        .embedded_in("http://shell.local/embed/")
        .with_location("/embed/xyz");
    let result = resolve(&[RouteSpec::leaf("", "home")], "", PAGES_PATH).unwrap();

    let table = RouteTable::assemble("", None, result.entries, None, &host);

    assert_eq!(table.entries[0], RouteEntry::Redirect(RedirectRoute::new("/embed/xyz", "/")));
    assert!(matches!(&table.entries[1], RouteEntry::Page(page) if page.path == "/"));
}

#[test]
fn test_scenario_landing_page_not_embedded() {
    let host = StaticHostContext::new()
        .with_location("/index.html")
        .with_landing_page("welcome");

    let landing = resolve_landing_page(host.landing_page().as_deref(), &host).unwrap();
    let result = resolve(&[RouteSpec::leaf("", "home")], "", PAGES_PATH).unwrap();
    let table = RouteTable::assemble("", landing, result.entries, None, &host);

    assert_eq!(
        table.entries[0],
        RouteEntry::Redirect(RedirectRoute::new("/index.html", "/welcome"))
    );
    assert_eq!(table.entries.len(), 2);
}
