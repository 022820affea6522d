#[cfg(test)]
#[path = "upvotes_test.rs"]
mod tests;

use futures::stream::FuturesUnordered;
use futures::StreamExt;

use crate::domain::models::ApiError;
use crate::domain::models::Page;
use crate::domain::models::PostsApiRef;
use crate::domain::models::UpvoteResponse;

pub struct UpvoteHandler {
    api: PostsApiRef,
}

impl UpvoteHandler {
    pub fn new(api: PostsApiRef) -> UpvoteHandler {
        return UpvoteHandler { api };
    }

    fn apply(page: &mut dyn Page, post_id: &str, res: Result<UpvoteResponse, ApiError>) {
        match res {
            Ok(body) => {
                if !page.set_upvotes(post_id, body.upvotes) {
                    tracing::warn!(post_id, "Upvoted post has no card on the page");
                }
            }
            Err(err) => {
                tracing::error!(error = ?err, post_id, "Error upvoting");
            }
        }
    }

    /// Sends one upvote for `post_id` and shows the count the backend returns.
    pub async fn click(&self, page: &mut dyn Page, post_id: &str) {
        let res = self.api.upvote(post_id).await;
        UpvoteHandler::apply(page, post_id, res);
    }

    /// Sends every upvote at once. Counts are applied in the order responses
    /// arrive, so the last response for a post wins.
    pub async fn click_all(&self, page: &mut dyn Page, post_ids: &[String]) {
        let mut pending = post_ids
            .iter()
            .map(|post_id| {
                return async move {
                    let res = self.api.upvote(post_id).await;
                    return (post_id, res);
                };
            })
            .collect::<FuturesUnordered<_>>();

        while let Some((post_id, res)) = pending.next().await {
            UpvoteHandler::apply(page, post_id, res);
        }
    }
}
