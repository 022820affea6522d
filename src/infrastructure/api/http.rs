#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_derive::Deserialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ApiError;
use crate::domain::models::CreatePostRequest;
use crate::domain::models::CreatePostResponse;
use crate::domain::models::ListQuery;
use crate::domain::models::Post;
use crate::domain::models::PostsApi;
use crate::domain::models::UpvoteResponse;

#[derive(Default, Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    detail: serde_json::Value,
}

impl ErrorResponse {
    /// Only plain string details are shown to users, validation error lists
    /// are not meant for display.
    fn message(&self) -> Option<String> {
        return self
            .detail
            .as_str()
            .filter(|detail| return !detail.trim().is_empty())
            .map(|detail| return detail.to_string());
    }
}

async fn read_json<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ApiError> {
    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        let err: ErrorResponse = serde_json::from_str(&body)?;
        let detail = err.message();
        tracing::debug!(
            status = status.as_u16(),
            detail = ?detail,
            "Backend rejected request"
        );

        return Err(ApiError::Rejected {
            status: status.as_u16(),
            detail,
        });
    }

    return Ok(serde_json::from_str(&body)?);
}

pub struct HttpPostsApi {
    url: String,
    client: reqwest::Client,
}

impl Default for HttpPostsApi {
    fn default() -> HttpPostsApi {
        return HttpPostsApi::new(Config::get(ConfigKey::ApiUrl));
    }
}

impl HttpPostsApi {
    pub fn new(url: String) -> HttpPostsApi {
        return HttpPostsApi {
            url,
            client: reqwest::Client::new(),
        };
    }

    /// Joins path segments onto the base url, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url, ApiError> {
        let mut url = reqwest::Url::parse(&self.url).map_err(|err| {
            return ApiError::Url(format!("{}: {err}", self.url));
        })?;

        url.path_segments_mut()
            .map_err(|_| return ApiError::Url(format!("{} cannot be a base url", self.url)))?
            .pop_if_empty()
            .extend(segments);

        return Ok(url);
    }
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    #[allow(clippy::implicit_return)]
    async fn create_post(&self, req: &CreatePostRequest) -> Result<CreatePostResponse, ApiError> {
        let res = self
            .client
            .post(self.endpoint(&["api", "posts"])?)
            .json(req)
            .send()
            .await?;

        let body: CreatePostResponse = read_json(res).await?;
        tracing::debug!(
            session_id = %body.session_id,
            similar_posts = body.similar_posts.len(),
            suggestions = body.suggestions.len(),
            "Create post response"
        );

        return Ok(body);
    }

    #[allow(clippy::implicit_return)]
    async fn list_posts(&self, query: &ListQuery) -> Result<Vec<Post>, ApiError> {
        let mut params: Vec<(&str, String)> = vec![];
        if let Some(emotion) = &query.emotion {
            params.push(("emotion", emotion.to_string()));
        }
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }

        let mut req = self.client.get(self.endpoint(&["api", "posts"])?);
        if !params.is_empty() {
            req = req.query(&params);
        }

        let posts: Vec<Post> = read_json(req.send().await?).await?;
        tracing::debug!(count = posts.len(), emotion = ?query.emotion, "List posts response");

        return Ok(posts);
    }

    #[allow(clippy::implicit_return)]
    async fn upvote(&self, post_id: &str) -> Result<UpvoteResponse, ApiError> {
        let res = self
            .client
            .post(self.endpoint(&["api", "posts", post_id, "upvote"])?)
            .send()
            .await?;

        let body: UpvoteResponse = read_json(res).await?;
        tracing::debug!(post_id, upvotes = body.upvotes, "Upvote response");

        return Ok(body);
    }
}
