#![allow(dead_code)]

use canvas_api::Canvas;
use serde_json::Value;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const TOKEN: &str = "7~token";

pub async fn setup() -> (MockServer, Canvas) {
    let server = MockServer::start().await;
    let canvas = Canvas::new(
        reqwest::Client::new(),
        &server.uri().parse().unwrap(),
        TOKEN.into(),
    )
    .unwrap();
    (server, canvas)
}

/// Mounts a single JSON response for `verb` on `/api/v1/{endpoint}`, which
/// has to be hit exactly once.
pub async fn mount(server: &MockServer, verb: &str, endpoint: &str, body: Value) {
    Mock::given(method(verb))
        .and(path(format!("/api/v1/{endpoint}")))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Mounts `pages` as consecutive pages of `/api/v1/{endpoint}`, linked
/// through `Link` headers.
pub async fn mount_pages(server: &MockServer, verb: &str, endpoint: &str, pages: Vec<Value>) {
    let page_count = pages.len();
    for (i, page) in pages.into_iter().enumerate() {
        let mut response = ResponseTemplate::new(200).set_body_json(page);
        if i + 1 < page_count {
            let link = format!(
                "<{}/api/v1/{endpoint}?page={}&per_page=2>; rel=\"next\", \
                 <{}/api/v1/{endpoint}?page=1&per_page=2>; rel=\"first\"",
                server.uri(),
                i + 2,
                server.uri(),
            );
            response = response.insert_header("Link", link.as_str());
        }
        let mock = Mock::given(method(verb)).and(path(format!("/api/v1/{endpoint}")));
        let mock = if i == 0 {
            mock.respond_with(response)
        } else {
            mock.and(query_param("page", (i + 1).to_string()))
                .respond_with(response)
                .with_priority(1)
        };
        mock.expect(1).mount(server).await;
    }
}

pub async fn mount_not_found(server: &MockServer, endpoint: &str) {
    Mock::given(path(format!("/api/v1/{endpoint}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "errors": [{"message": "The specified resource does not exist."}]
        })))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn assert_no_requests(server: &MockServer) {
    assert!(server.received_requests().await.unwrap().is_empty());
}
