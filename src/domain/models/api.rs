use std::sync::Arc;

use async_trait::async_trait;

use super::CreatePostRequest;
use super::CreatePostResponse;
use super::Post;
use super::UpvoteResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status. `detail` carries the
    /// backend's own error message when it provided a readable one.
    #[error("backend rejected the request with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    #[error("failed to reach the backend: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned a malformed body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid backend url: {0}")]
    Url(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub emotion: Option<String>,
    pub limit: Option<u32>,
}

impl ListQuery {
    /// An empty filter selection lists every post.
    pub fn with_emotion(emotion: Option<&str>) -> ListQuery {
        let emotion = emotion
            .map(|e| return e.trim())
            .filter(|e| return !e.is_empty())
            .map(|e| return e.to_string());

        return ListQuery {
            emotion,
            limit: None,
        };
    }
}

#[async_trait]
pub trait PostsApi {
    /// Submits a new post. The response carries the session id the backend
    /// assigned (or reused), the AI reply, similar posts and suggestions.
    async fn create_post(&self, req: &CreatePostRequest) -> Result<CreatePostResponse, ApiError>;

    /// Lists community posts, optionally scoped to a single emotion.
    async fn list_posts(&self, query: &ListQuery) -> Result<Vec<Post>, ApiError>;

    /// Adds one vote to a post. Not idempotent, every call counts.
    async fn upvote(&self, post_id: &str) -> Result<UpvoteResponse, ApiError>;
}

pub type PostsApiRef = Arc<dyn PostsApi + Send + Sync>;
