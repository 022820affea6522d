#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;

use std::path;
use std::sync::Arc;

use anyhow::anyhow;
use anyhow::Result;
use owo_colors::OwoColorize;
use owo_colors::Stream;
use tokio::fs;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::KeyValueStoreBox;
use crate::domain::models::PageEvent;
use crate::domain::models::PageKind;
use crate::domain::models::PostsApiRef;
use crate::domain::models::StoreName;
use crate::domain::services::Assets;
use crate::domain::services::CommunityPage;
use crate::domain::services::Document;
use crate::domain::services::Router;
use crate::domain::services::SessionContext;
use crate::domain::services::SharePage;
use crate::domain::services::UpvoteHandler;
use crate::infrastructure::api::HttpPostsApi;
use crate::infrastructure::storage::StoreManager;

/// A page to open and the interactions to replay on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub kind: PageKind,
    pub events: Vec<PageEvent>,
    pub upvotes: Vec<String>,
    pub limit: Option<u32>,
    pub out_dir: Option<path::PathBuf>,
}

pub struct PageOutcome {
    pub document: Document,
    pub html: String,
}

impl PageOutcome {
    pub fn alerts(&self) -> &[String] {
        return self.document.alerts();
    }
}

/// Opens the page, replays every event in order, then fires the upvotes
/// concurrently.
pub async fn open(
    request: &PageRequest,
    api: PostsApiRef,
    store: KeyValueStoreBox,
) -> Result<PageOutcome> {
    let session = SessionContext::load(store).await?;
    let mut router = Router::new(
        SharePage::new(api.clone(), session),
        CommunityPage::new(api.clone(), request.limit),
        UpvoteHandler::new(api),
    );

    let mut document = Document::new(request.kind);
    for event in request.events.iter() {
        router.dispatch(&mut document, event.clone()).await;
    }

    if !request.upvotes.is_empty() {
        router.dispatch_upvotes(&mut document, &request.upvotes).await;
    }

    tracing::debug!(
        page = %request.kind,
        session_id = ?router.share().session().current(),
        alerts = document.alerts().len(),
        "Page settled"
    );

    let html = document.render()?;
    return Ok(PageOutcome { document, html });
}

pub async fn write(out_dir: &path::Path, kind: PageKind, html: &str) -> Result<path::PathBuf> {
    fs::create_dir_all(out_dir).await?;

    let page_path = out_dir.join(format!("{kind}.html"));
    fs::write(&page_path, html).await?;
    Assets::export(out_dir).await?;

    return Ok(page_path);
}

/// Runs a page request with the configured backend and store. Returns false
/// when the page raised any alert.
pub async fn run(request: PageRequest) -> Result<bool> {
    let store_name = StoreName::parse(Config::get(ConfigKey::Store))
        .ok_or_else(|| return anyhow!("Unknown store {}", Config::get(ConfigKey::Store)))?;
    let api: PostsApiRef = Arc::new(HttpPostsApi::default());

    let outcome = open(&request, api, StoreManager::get(store_name)?).await?;

    for alert in outcome.alerts() {
        eprintln!(
            "{}",
            alert.if_supports_color(Stream::Stderr, |text| return text.yellow())
        );
    }

    if let Some(out_dir) = &request.out_dir {
        let page_path = write(out_dir, request.kind, &outcome.html).await?;
        println!("Wrote {}", page_path.to_string_lossy());
    } else {
        println!("{}", outcome.html);
    }

    return Ok(outcome.alerts().is_empty());
}
