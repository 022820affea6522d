use std::sync::Arc;

use anyhow::Result;

use super::UpvoteHandler;
use crate::domain::models::CardList;
use crate::domain::models::Page;
use crate::domain::models::PageKind;
use crate::domain::models::PostCard;
use crate::domain::services::Document;
use crate::infrastructure::api::HttpPostsApi;

fn card(post_id: &str, upvotes: u64) -> PostCard {
    return PostCard {
        post_id: post_id.to_string(),
        icon_src: "/static/assets/happy.svg".to_string(),
        content: "content".to_string(),
        date: "3/5/2024".to_string(),
        upvotes,
    };
}

fn community_doc() -> Document {
    let mut doc = Document::new(PageKind::Community);
    doc.set_posts(CardList::new(
        vec![card("p1", 100), card("p2", 7)],
        "none",
    ));
    return doc;
}

fn counts(doc: &Document) -> Vec<u64> {
    return doc
        .posts()
        .unwrap()
        .cards()
        .iter()
        .map(|c| return c.upvotes)
        .collect();
}

#[tokio::test]
async fn it_shows_the_server_count_on_the_clicked_card_only() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/posts/p1/upvote")
        .with_status(200)
        .with_body(r#"{"upvotes": 3}"#)
        .expect(1)
        .create_async()
        .await;

    let handler = UpvoteHandler::new(Arc::new(HttpPostsApi::new(server.url())));
    let mut doc = community_doc();
    handler.click(&mut doc, "p1").await;
    mock.assert_async().await;

    assert_eq!(counts(&doc), vec![3, 7]);
    return Ok(());
}

#[tokio::test]
async fn it_keeps_the_previous_count_on_failures() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/posts/p2/upvote")
        .with_status(404)
        .with_body(r#"{"detail": "Post not found"}"#)
        .create_async()
        .await;

    let handler = UpvoteHandler::new(Arc::new(HttpPostsApi::new(server.url())));
    let mut doc = community_doc();
    handler.click(&mut doc, "p2").await;

    assert_eq!(counts(&doc), vec![100, 7]);
    assert!(doc.alerts().is_empty());
    return Ok(());
}

#[tokio::test]
async fn it_sends_one_request_per_click() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let first = server
        .mock("POST", "/api/posts/p1/upvote")
        .with_status(200)
        .with_body(r#"{"upvotes": 102}"#)
        .expect(2)
        .create_async()
        .await;
    let second = server
        .mock("POST", "/api/posts/p2/upvote")
        .with_status(200)
        .with_body(r#"{"upvotes": 8}"#)
        .expect(1)
        .create_async()
        .await;

    let handler = UpvoteHandler::new(Arc::new(HttpPostsApi::new(server.url())));
    let mut doc = community_doc();
    handler
        .click_all(
            &mut doc,
            &["p1".to_string(), "p2".to_string(), "p1".to_string()],
        )
        .await;
    first.assert_async().await;
    second.assert_async().await;

    assert_eq!(counts(&doc), vec![102, 8]);
    return Ok(());
}

#[tokio::test]
async fn it_still_upvotes_posts_without_a_card() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/posts/elsewhere/upvote")
        .with_status(200)
        .with_body(r#"{"upvotes": 1}"#)
        .expect(1)
        .create_async()
        .await;

    let handler = UpvoteHandler::new(Arc::new(HttpPostsApi::new(server.url())));
    let mut doc = community_doc();
    handler.click(&mut doc, "elsewhere").await;
    mock.assert_async().await;

    assert_eq!(counts(&doc), vec![100, 7]);
    return Ok(());
}
