pub mod http;

pub use http::HttpPostsApi;
