use std::io;
use std::sync::Arc;
use std::sync::Mutex;

use anyhow::Result;
use mockito::Matcher;
use test_utils::posts_fixture;

use super::CommunityPage;
use super::NO_POSTS;
use crate::domain::models::CardList;
use crate::domain::models::PageKind;
use crate::domain::services::Document;
use crate::infrastructure::api::HttpPostsApi;

#[derive(Clone, Default)]
struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        return Ok(buf.len());
    }

    fn flush(&mut self) -> io::Result<()> {
        return Ok(());
    }
}

impl LogCapture {
    fn lines_at(&self, level: &str) -> usize {
        let logs = String::from_utf8_lossy(&self.0.lock().unwrap()).to_string();
        return logs.lines().filter(|line| return line.contains(level)).count();
    }
}

fn community_page(url: String, limit: Option<u32>) -> CommunityPage {
    return CommunityPage::new(Arc::new(HttpPostsApi::new(url)), limit);
}

#[tokio::test]
async fn it_renders_one_card_per_post() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/posts")
        .with_status(200)
        .with_body(posts_fixture())
        .create_async()
        .await;

    let mut doc = Document::new(PageKind::Community);
    community_page(server.url(), None)
        .load_posts(&mut doc, None)
        .await;
    mock.assert_async().await;

    let cards = doc.posts().unwrap().cards();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[2].icon_src, "/static/assets/neutral.svg");
    assert_eq!(cards[2].upvotes, 0);

    let html = doc.render()?;
    for post_id in ["p1", "p2", "p3"] {
        assert!(html.contains(&format!(r#"<div class="post-card" data-post-id="{post_id}">"#)));
    }

    return Ok(());
}

#[tokio::test]
async fn it_renders_a_placeholder_without_posts() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/posts")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let mut doc = Document::new(PageKind::Community);
    community_page(server.url(), None)
        .load_posts(&mut doc, None)
        .await;

    assert_eq!(
        doc.posts(),
        Some(&CardList::Empty {
            placeholder: NO_POSTS.to_string()
        })
    );

    return Ok(());
}

#[tokio::test]
async fn it_replaces_the_listing_with_filtered_posts() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/posts")
        .match_query(Matcher::Regex("^$".to_string()))
        .with_status(200)
        .with_body(posts_fixture())
        .create_async()
        .await;
    let filtered = server
        .mock("GET", "/api/posts")
        .match_query(Matcher::UrlEncoded("emotion".to_string(), "sad".to_string()))
        .with_status(200)
        .with_body(
            r#"[{"post_id": "p2", "content": "Missing home", "emotion": "sad", "timestamp": "2024-03-04T21:40:00", "upvotes": 1}]"#,
        )
        .expect(1)
        .create_async()
        .await;

    let controller = community_page(server.url(), None);
    let mut doc = Document::new(PageKind::Community);
    controller.load_posts(&mut doc, None).await;
    controller.load_posts(&mut doc, Some("sad")).await;
    filtered.assert_async().await;

    let ids = doc
        .posts()
        .unwrap()
        .cards()
        .iter()
        .map(|c| return c.post_id.to_string())
        .collect::<Vec<String>>();
    assert_eq!(ids, vec!["p2".to_string()]);

    return Ok(());
}

#[tokio::test]
async fn it_sends_the_configured_limit() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/posts")
        .match_query(Matcher::UrlEncoded("limit".to_string(), "2".to_string()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let mut doc = Document::new(PageKind::Community);
    community_page(server.url(), Some(2))
        .load_posts(&mut doc, None)
        .await;
    mock.assert_async().await;

    return Ok(());
}

#[tokio::test]
async fn it_leaves_the_page_as_is_on_failures() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/posts")
        .match_query(Matcher::Regex("^$".to_string()))
        .with_status(200)
        .with_body(posts_fixture())
        .create_async()
        .await;
    server
        .mock("GET", "/api/posts")
        .match_query(Matcher::UrlEncoded("emotion".to_string(), "angry".to_string()))
        .with_status(500)
        .with_body(r#"{"detail": "boom"}"#)
        .create_async()
        .await;

    let controller = community_page(server.url(), None);
    let mut doc = Document::new(PageKind::Community);
    controller.load_posts(&mut doc, None).await;
    controller.load_posts(&mut doc, Some("angry")).await;

    assert_eq!(doc.posts().unwrap().cards().len(), 3);
    assert!(doc.alerts().is_empty());

    return Ok(());
}

#[tokio::test]
async fn it_leaves_the_page_as_is_on_network_failures() {
    let mut doc = Document::new(PageKind::Community);
    community_page("http://127.0.0.1:1".to_string(), None)
        .load_posts(&mut doc, None)
        .await;

    assert_eq!(doc.posts(), None);
    assert!(doc.alerts().is_empty());
}

#[tokio::test]
async fn it_logs_rejected_listings_once() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/posts")
        .with_status(500)
        .with_body(r#"{"detail": "boom"}"#)
        .create_async()
        .await;

    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || return writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let mut doc = Document::new(PageKind::Community);
    community_page(server.url(), None)
        .load_posts(&mut doc, None)
        .await;

    assert_eq!(capture.lines_at("ERROR"), 1);
    assert_eq!(capture.lines_at("Error loading posts"), 1);
    assert_eq!(capture.lines_at("Backend rejected request"), 1);

    return Ok(());
}
