//! End-to-end version status resolution tests

mod helper;

use std::sync::Arc;
use std::io::Write;
use std::time::{Duration, Instant};

use mockito::{Matcher, Server};

use helper::{MockStore, config_for};
use store_version_check::platform::{IdentifierOverrides, LocalPackage, Platform};
use store_version_check::version::error::{ResolveError, VersionSource};
use store_version_check::version::resolver::VersionStatusResolver;
use store_version_check::version::store::StoreKind;

fn lookup_body(version: &str, link: &str) -> String {
    format!(
        r#"{{"resultCount": 1, "results": [{{"bundleId": "com.example.app", "version": "{}", "trackViewUrl": "{}"}}]}}"#,
        version, link
    )
}

fn details_page(version: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><body>
        <div class="hAyfc"><div class="BgcNfc">Updated</div><span class="htlgb">March 3, 2024</span></div>
        <div class="hAyfc"><div class="BgcNfc">Current Version</div><span class="htlgb"><div class="IQ1z0d"><span class="htlgb">{}</span></div></span></div>
        </body></html>"#,
        version
    )
}

#[tokio::test]
async fn ios_update_available_from_app_store() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/lookup")
        .match_query(Matcher::UrlEncoded("bundleId".into(), "com.example.app".into()))
        .with_status(200)
        .with_body(lookup_body("1.1.0", "https://example/app"))
        .create_async()
        .await;

    let resolver = VersionStatusResolver::from_config(&config_for(&server.url())).unwrap();
    let status = resolver
        .resolve(Platform::Ios, "1.0.0", "com.example.app")
        .await
        .unwrap()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        serde_json::to_value(&status).unwrap(),
        serde_json::json!({
            "canUpdate": true,
            "localVersion": "1.0.0",
            "storeVersion": "1.1.0",
            "storeLink": "https://example/app"
        })
    );
}

#[tokio::test]
async fn ios_same_version_is_not_an_update() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/lookup")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(lookup_body("2.0.0", "https://example/app"))
        .create_async()
        .await;

    let resolver = VersionStatusResolver::from_config(&config_for(&server.url())).unwrap();
    let status = resolver
        .resolve(Platform::Ios, "2.0.0", "com.example.app")
        .await
        .unwrap()
        .unwrap();

    mock.assert_async().await;
    assert!(!status.can_update());
    assert_eq!(status.store_version(), "2.0.0");
}

#[tokio::test]
async fn android_debug_build_checks_play_store_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/store/apps/details")
        .match_query(Matcher::UrlEncoded("id".into(), "com.example.app".into()))
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(details_page("1.5.0"))
        .create_async()
        .await;

    let resolver = VersionStatusResolver::from_config(&config_for(&server.url())).unwrap();
    let status = resolver
        .resolve(Platform::Android, "1.4.2.debug", "com.example.app")
        .await
        .unwrap()
        .unwrap();

    mock.assert_async().await;
    assert!(status.can_update());
    assert_eq!(status.local_version(), "1.4.2.debug");
    assert_eq!(status.store_version(), "1.5.0");
    assert_eq!(
        status.store_link(),
        format!("{}/store/apps/details?id=com.example.app", server.url())
    );
}

#[tokio::test]
async fn android_unlisted_package_has_no_update_information() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/store/apps/details")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let resolver = VersionStatusResolver::from_config(&config_for(&server.url())).unwrap();
    let result = resolver
        .resolve(Platform::Android, "1.0.0", "com.example.missing")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(result.is_none());
}

#[tokio::test]
async fn changed_play_store_markup_has_no_update_information() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/store/apps/details")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html><body><h2>About this app</h2></body></html>")
        .create_async()
        .await;

    let resolver = VersionStatusResolver::from_config(&config_for(&server.url())).unwrap();
    let result = resolver
        .resolve(Platform::Android, "1.0.0", "com.example.app")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(result.is_none());
}

#[tokio::test]
async fn unparseable_store_version_is_an_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/store/apps/details")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(details_page("Varies with device"))
        .create_async()
        .await;

    let resolver = VersionStatusResolver::from_config(&config_for(&server.url())).unwrap();
    let result = resolver
        .resolve(Platform::Android, "1.0.0", "com.example.app")
        .await;

    mock.assert_async().await;
    assert!(matches!(
        result,
        Err(ResolveError::Parse {
            source_kind: VersionSource::Store,
            ..
        })
    ));
}

#[tokio::test]
async fn unreachable_store_is_a_transport_error() {
    let resolver =
        VersionStatusResolver::from_config(&config_for("http://127.0.0.1:9")).unwrap();

    let result = resolver
        .resolve(Platform::Ios, "1.0.0", "com.example.app")
        .await;

    assert!(matches!(result, Err(ResolveError::Transport(_))));
}

#[tokio::test]
async fn unsupported_platform_never_contacts_a_store() {
    let app_store = Arc::new(MockStore::new(StoreKind::AppStore));
    let play_store = Arc::new(MockStore::new(StoreKind::PlayStore));
    let resolver = VersionStatusResolver::new(app_store.clone(), play_store.clone());

    let result = resolver
        .resolve(Platform::Unsupported, "1.0.0", "com.example.app")
        .await
        .unwrap();

    assert!(result.is_none());
    assert_eq!(app_store.calls() + play_store.calls(), 0);
}

#[tokio::test]
async fn override_identifier_is_used_for_lookup() {
    let app_store = Arc::new(
        MockStore::new(StoreKind::AppStore).with_listing("com.example.ios", "3.0.0", "https://example/ios"),
    );
    let play_store = Arc::new(MockStore::new(StoreKind::PlayStore));
    let resolver = VersionStatusResolver::new(app_store.clone(), play_store);

    let package = LocalPackage::new("2.9.9", "com.example.app");
    let overrides = IdentifierOverrides {
        ios: Some("com.example.ios".to_string()),
        android: None,
    };

    let status = resolver
        .resolve(
            Platform::Ios,
            &package.version,
            package.store_identifier(Platform::Ios, &overrides),
        )
        .await
        .unwrap()
        .unwrap();

    assert!(status.can_update());
    assert_eq!(status.store_link(), "https://example/ios");
    assert_eq!(app_store.calls(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_resolves_are_independent() {
    let app_store = Arc::new(
        MockStore::new(StoreKind::AppStore)
            .with_listing("com.example.a", "1.1.0", "https://example/a")
            .with_listing("com.example.b", "1.0.0", "https://example/b"),
    );
    let play_store = Arc::new(
        MockStore::new(StoreKind::PlayStore).with_listing("com.example.c", "2.0.0", "https://example/c"),
    );
    let resolver = Arc::new(VersionStatusResolver::new(app_store, play_store));

    let cases = [
        (Platform::Ios, "1.0.0", "com.example.a", Some(true)),
        (Platform::Ios, "1.0.0", "com.example.b", Some(false)),
        (Platform::Android, "1.9.0.debug", "com.example.c", Some(true)),
        (Platform::Android, "1.0.0", "com.example.missing", None),
        (Platform::Unsupported, "1.0.0", "com.example.a", None),
    ];

    let handles: Vec<_> = cases
        .iter()
        .map(|&(platform, local, id, _)| {
            let resolver = resolver.clone();
            tokio::spawn(async move { resolver.resolve(platform, local, id).await })
        })
        .collect();

    let results = futures::future::join_all(handles).await;

    for (result, (_, _, id, expected)) in results.into_iter().zip(cases) {
        let status = result.unwrap().unwrap();
        assert_eq!(status.map(|s| s.can_update()), expected, "{}", id);
    }
}

/// Mock a lookup answer whose body arrives only after `delay`
async fn delayed_lookup(server: &mut mockito::ServerGuard, delay: Duration) -> mockito::Mock {
    server
        .mock("GET", "/lookup")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_chunked_body(move |w| {
            std::thread::sleep(delay);
            w.write_all(lookup_body("1.1.0", "https://example/app").as_bytes())
        })
        .create_async()
        .await
}

#[tokio::test]
async fn cancelled_resolve_abandons_in_flight_request() {
    let mut server = Server::new_async().await;
    let _mock = delayed_lookup(&mut server, Duration::from_secs(2)).await;

    let resolver = VersionStatusResolver::from_config(&config_for(&server.url())).unwrap();

    let started = Instant::now();
    let result = tokio::time::timeout(
        Duration::from_millis(100),
        resolver.resolve(Platform::Ios, "1.0.0", "com.example.app"),
    )
    .await;

    assert!(result.is_err());
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn configured_timeout_fails_slow_store_as_transport_error() {
    let mut server = Server::new_async().await;
    let _mock = delayed_lookup(&mut server, Duration::from_millis(500)).await;

    let mut config = config_for(&server.url());
    config.timeout_ms = 50;
    let resolver = VersionStatusResolver::from_config(&config).unwrap();

    let result = resolver
        .resolve(Platform::Ios, "1.0.0", "com.example.app")
        .await;

    assert!(matches!(result, Err(ResolveError::Transport(_))));
}

#[tokio::test]
async fn zero_timeout_disables_request_timeout() {
    let mut server = Server::new_async().await;
    let mock = delayed_lookup(&mut server, Duration::from_millis(100)).await;

    let mut config = config_for(&server.url());
    config.timeout_ms = 0;
    let resolver = VersionStatusResolver::from_config(&config).unwrap();

    let status = resolver
        .resolve(Platform::Ios, "1.0.0", "com.example.app")
        .await
        .unwrap()
        .unwrap();

    mock.assert_async().await;
    assert!(status.can_update());
}

#[tokio::test]
async fn ios_build_metadata_only_difference_is_not_an_update() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/lookup")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(lookup_body("1.0.0+42", "https://example/app"))
        .create_async()
        .await;

    let resolver = VersionStatusResolver::from_config(&config_for(&server.url())).unwrap();
    let status = resolver
        .resolve(Platform::Ios, "1.0.0", "com.example.app")
        .await
        .unwrap()
        .unwrap();

    mock.assert_async().await;
    assert!(!status.can_update());
}

#[tokio::test]
async fn app_store_error_body_has_no_update_information() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/lookup")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"errorMessage": "Invalid value(s) for key(s): [bundleId]"}"#)
        .create_async()
        .await;

    let resolver = VersionStatusResolver::from_config(&config_for(&server.url())).unwrap();
    let result = resolver
        .resolve(Platform::Ios, "1.0.0", "com.example.app")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(result.is_none());
}
