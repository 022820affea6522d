#[cfg(test)]
#[path = "cards_test.rs"]
mod tests;

use anyhow::Result;
use askama::Template;
use chrono::DateTime;
use chrono::Datelike;
use chrono::Local;
use chrono::NaiveDate;
use chrono::NaiveDateTime;

use crate::domain::models::CardList;
use crate::domain::models::Post;
use crate::domain::models::PostCard;

pub const ASSETS_URL_PATH: &str = "/static/assets";
pub const INVALID_DATE: &str = "Invalid Date";

#[derive(Template)]
#[template(path = "post_card.html")]
struct PostCardTemplate<'a> {
    card: &'a PostCard,
}

#[derive(Template)]
#[template(path = "placeholder.html")]
struct PlaceholderTemplate<'a> {
    text: &'a str,
}

#[derive(Template)]
#[template(path = "suggestions.html")]
struct SuggestionsTemplate<'a> {
    suggestions: &'a [String],
}

fn parse_date(timestamp: &str) -> Option<NaiveDate> {
    let timestamp = timestamp.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(date.with_timezone(&Local).date_naive());
    }

    // Timestamps without an offset are wall-clock times already.
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(date) = NaiveDateTime::parse_from_str(timestamp, format) {
            return Some(date.date());
        }
    }

    return NaiveDate::parse_from_str(timestamp, "%Y-%m-%d").ok();
}

/// Formats a backend timestamp as a short `M/D/YYYY` date.
pub fn format_date(timestamp: &str) -> String {
    if let Some(date) = parse_date(timestamp) {
        return format!("{}/{}/{}", date.month(), date.day(), date.year());
    }

    tracing::debug!(timestamp, "Unparseable post timestamp");
    return INVALID_DATE.to_string();
}

pub struct Cards {}

impl Cards {
    pub fn from_post(post: &Post) -> PostCard {
        let icon = post.display_emotion().icon_file();

        return PostCard {
            post_id: post.post_id.to_string(),
            icon_src: format!("{ASSETS_URL_PATH}/{icon}"),
            content: post.content.to_string(),
            date: format_date(&post.timestamp),
            upvotes: post.display_upvotes(),
        };
    }

    pub fn list(posts: &[Post], placeholder: &str) -> CardList {
        let cards = posts.iter().map(Cards::from_post).collect::<Vec<PostCard>>();
        return CardList::new(cards, placeholder);
    }

    pub fn render(card: &PostCard) -> Result<String> {
        return Ok(PostCardTemplate { card }.render()?);
    }

    pub fn render_list(list: &CardList) -> Result<String> {
        match list {
            CardList::Empty { placeholder } => {
                return Ok(PlaceholderTemplate { text: placeholder }.render()?);
            }
            CardList::Cards(cards) => {
                let rendered = cards
                    .iter()
                    .map(Cards::render)
                    .collect::<Result<Vec<String>>>()?;

                return Ok(rendered.join(""));
            }
        }
    }

    pub fn render_suggestions(suggestions: &[String]) -> Result<String> {
        return Ok(SuggestionsTemplate { suggestions }.render()?);
    }
}
