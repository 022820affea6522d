#[cfg(test)]
#[path = "router_test.rs"]
mod tests;

use super::CommunityPage;
use super::SharePage;
use super::UpvoteHandler;
use crate::domain::models::ListQuery;
use crate::domain::models::Page;
use crate::domain::models::PageEvent;
use crate::domain::models::PageKind;

/// Routes page events to the controller owning the element they came from.
/// Events for elements the current page does not have are ignored.
pub struct Router {
    share: SharePage,
    community: CommunityPage,
    upvotes: UpvoteHandler,
}

impl Router {
    pub fn new(share: SharePage, community: CommunityPage, upvotes: UpvoteHandler) -> Router {
        return Router {
            share,
            community,
            upvotes,
        };
    }

    pub fn share(&self) -> &SharePage {
        return &self.share;
    }

    pub async fn dispatch(&mut self, page: &mut dyn Page, event: PageEvent) {
        let kind = page.kind();

        match (kind, event) {
            (PageKind::Community, PageEvent::Loaded) => {
                self.community.load_posts(page, None).await;
            }
            (PageKind::Share, PageEvent::Loaded) => {}
            (PageKind::Share, PageEvent::Submit { content, emotion }) => {
                self.share.submit(page, &content, &emotion).await;
            }
            (PageKind::Community, PageEvent::Filter { emotion }) => {
                let selection = ListQuery::with_emotion(emotion.as_deref()).emotion;
                page.set_filter_selection(selection.as_deref());
                self.community.load_posts(page, selection.as_deref()).await;
            }
            (_, PageEvent::Upvote { post_id }) => {
                self.upvotes.click(page, &post_id).await;
            }
            (kind, event) => {
                tracing::debug!(page = %kind, event = ?event, "Event has no target on this page");
            }
        }
    }

    /// Dispatches several upvote clicks without waiting for each response.
    pub async fn dispatch_upvotes(&self, page: &mut dyn Page, post_ids: &[String]) {
        self.upvotes.click_all(page, post_ids).await;
    }
}
