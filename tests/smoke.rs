// ABOUTME: End-to-end smoke test for the composed costview shell.
// ABOUTME: Covers route resolution, session headers, and the auth-redirect flow through the public API.

use std::sync::Arc;

use costview_client::testing::{CaptureTransport, RecordingNavigator, StaticTransport};
use costview_client::{HeaderCookies, Shell, ShellConfig};
use http::{Request, StatusCode};

fn admin_config() -> ShellConfig {
    let mut config = ShellConfig::default();
    config.admin_views = true;
    config
}

#[tokio::test]
async fn smoke_test_full_session() {
    // 1. Compose the shell the way the binary does, with a captured
    //    transport and a recording navigator standing in for the backend
    //    and the window.
    let transport = Arc::new(CaptureTransport::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let cookies = HeaderCookies::parse("sessionid=s1; csrftoken=smoke-tok");
    let shell = Shell::new(&admin_config(), &cookies, navigator.clone(), transport.clone());

    // 2. Registered paths resolve to their declared bindings.
    let resolved = shell.resolve("/allocation/client/");
    assert_eq!(resolved.entry.controller, "allocationClientCtrl");
    assert_eq!(
        shell.template_url(resolved.entry),
        "/static/partials/allocationclient.html"
    );
    assert!(resolved.redirected_from.is_none());

    // 3. Unknown paths fall back to the components view.
    let resolved = shell.resolve("/unknown/path/");
    assert_eq!(resolved.entry.controller, "componentsCtrl");
    assert_eq!(resolved.redirected_from.as_deref(), Some("/unknown/path/"));

    // 4. Outbound requests carry both session headers.
    let resp = shell
        .send(Request::get("/components/").body(Vec::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let headers = &requests[0].headers;
    assert_eq!(
        headers.get("x-requested-with").and_then(|v| v.to_str().ok()),
        Some("XMLHttpRequest")
    );
    assert_eq!(
        headers.get("x-csrftoken").and_then(|v| v.to_str().ok()),
        Some("smoke-tok")
    );

    // 5. A clean session never navigated anywhere.
    assert!(navigator.replacements().is_empty());
}

#[tokio::test]
async fn smoke_test_rejected_session_redirects_to_login() {
    let navigator = Arc::new(RecordingNavigator::default());
    let shell = Shell::new(
        &admin_config(),
        &HeaderCookies::empty(),
        navigator.clone(),
        Arc::new(StaticTransport::new(StatusCode::FORBIDDEN)),
    );

    let resp = shell
        .send(Request::get("/costcard/").body(Vec::new()).unwrap())
        .await
        .unwrap();

    // The caller still sees the 403 after the login navigation fired.
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(navigator.replacements(), vec!["/login/".to_string()]);
}

#[tokio::test]
async fn smoke_test_cookieless_session_omits_credential_header() {
    let transport = Arc::new(CaptureTransport::default());
    let shell = Shell::new(
        &ShellConfig::default(),
        &HeaderCookies::empty(),
        Arc::new(RecordingNavigator::default()),
        transport.clone(),
    );

    shell
        .send(Request::get("/components/").body(Vec::new()).unwrap())
        .await
        .unwrap();

    let headers = &transport.requests()[0].headers;
    assert!(headers.get("x-csrftoken").is_none());
    assert!(headers.get("x-requested-with").is_some());
}
