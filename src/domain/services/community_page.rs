#[cfg(test)]
#[path = "community_page_test.rs"]
mod tests;

use super::Cards;
use crate::domain::models::ListQuery;
use crate::domain::models::Page;
use crate::domain::models::PostsApiRef;

pub const NO_POSTS: &str = "No posts found. Be the first to share!";

pub struct CommunityPage {
    api: PostsApiRef,
    limit: Option<u32>,
}

impl CommunityPage {
    pub fn new(api: PostsApiRef, limit: Option<u32>) -> CommunityPage {
        return CommunityPage { api, limit };
    }

    /// Replaces the listing with the posts for `emotion`, or every post when
    /// no filter is selected. Failures are logged and leave the page as is.
    pub async fn load_posts(&self, page: &mut dyn Page, emotion: Option<&str>) {
        let mut query = ListQuery::with_emotion(emotion);
        query.limit = self.limit;

        match self.api.list_posts(&query).await {
            Ok(posts) => {
                page.set_posts(Cards::list(&posts, NO_POSTS));
            }
            Err(err) => {
                tracing::error!(error = ?err, emotion = ?query.emotion, "Error loading posts");
            }
        }
    }
}
