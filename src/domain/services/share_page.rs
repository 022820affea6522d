#[cfg(test)]
#[path = "share_page_test.rs"]
mod tests;

use super::Cards;
use super::SessionContext;
use crate::domain::models::ApiError;
use crate::domain::models::CreatePostRequest;
use crate::domain::models::CreatePostResponse;
use crate::domain::models::Page;
use crate::domain::models::PostsApiRef;

pub const SUBMIT_REJECTED: &str = "Failed to submit post.";
pub const SUBMIT_FAILED: &str = "Failed to submit post. Please try again.";
pub const NO_SIMILAR_POSTS: &str = "No similar posts found yet.";

/// Drives the share form: one best-effort request per submission, the form is
/// left as is on failure so the user can retry.
pub struct SharePage {
    api: PostsApiRef,
    session: SessionContext,
}

impl SharePage {
    pub fn new(api: PostsApiRef, session: SessionContext) -> SharePage {
        return SharePage { api, session };
    }

    pub fn session(&self) -> &SessionContext {
        return &self.session;
    }

    pub async fn submit(&mut self, page: &mut dyn Page, content: &str, emotion: &str) {
        let req = CreatePostRequest {
            content: content.to_string(),
            emotion: emotion.to_string(),
            session_id: self.session.current().map(|id| return id.to_string()),
        };
        tracing::debug!(emotion, session_id = ?req.session_id, "Form submitted");

        let res = match self.api.create_post(&req).await {
            Ok(res) => res,
            Err(ApiError::Rejected { detail, .. }) => {
                page.alert(detail.as_deref().unwrap_or(SUBMIT_REJECTED));
                return;
            }
            Err(err) => {
                tracing::error!(error = ?err, "Failed to submit post");
                page.alert(SUBMIT_FAILED);
                return;
            }
        };

        if let Err(err) = self.session.adopt(&res.session_id).await {
            tracing::error!(error = ?err, "Failed to persist session");
            page.alert(SUBMIT_FAILED);
            return;
        }

        SharePage::display_response(page, &res);
        page.reveal_response_section();
    }

    fn display_response(page: &mut dyn Page, res: &CreatePostResponse) {
        page.set_ai_response(res.ai_response.as_deref().unwrap_or_default());
        page.set_similar_posts(Cards::list(&res.similar_posts, NO_SIMILAR_POSTS));
        page.set_suggestions(&res.suggestions);
    }
}
