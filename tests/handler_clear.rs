mod common;

#[tokio::test]
async fn test_clear_redirects_to_root() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/clear").add_header("Host", common::HOST).await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn test_clear_removes_entries_and_restarts_numbering() {
    let server = common::create_test_server(common::create_test_state());
    common::shorten(&server, "https://a.example").await;
    common::shorten(&server, "https://b.example").await;

    server
        .get("/clear")
        .add_header("Host", common::HOST)
        .await;

    for path in ["/1", "/2"] {
        server
            .get(path)
            .add_header("Host", common::HOST)
            .await
            .assert_status_not_found();
    }

    let short_url = common::shorten(&server, "https://c.example").await;
    assert_eq!(short_url, "http://sho.rt/1");
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let server = common::create_test_server(common::create_test_state());

    let short_url = common::shorten(&server, "https://example.com").await;
    assert_eq!(short_url, "http://sho.rt/1");

    let response = server.get("/1").add_header("Host", common::HOST).await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "https://example.com");

    let response = server.get("/clear").add_header("Host", common::HOST).await;
    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "/");

    server
        .get("/1")
        .add_header("Host", common::HOST)
        .await
        .assert_status_not_found();
}
