#[cfg(test)]
#[path = "document_test.rs"]
mod tests;

use anyhow::Result;
use askama::Template;
use strum::IntoEnumIterator;

use super::Cards;
use crate::domain::models::CardList;
use crate::domain::models::Emotion;
use crate::domain::models::Page;
use crate::domain::models::PageKind;

struct EmotionOption {
    name: String,
    selected: bool,
}

#[derive(Template)]
#[template(path = "share.html")]
struct ShareTemplate<'a> {
    emotions: Vec<String>,
    revealed: bool,
    ai_response: &'a str,
    similar_posts: String,
    suggestions: String,
}

#[derive(Template)]
#[template(path = "community.html")]
struct CommunityTemplate {
    emotions: Vec<EmotionOption>,
    posts: String,
}

/// In-memory page state. Regions start out untouched and are replaced
/// wholesale by the controllers, the same way a browser page is patched.
pub struct Document {
    kind: PageKind,
    alerts: Vec<String>,
    ai_response: String,
    similar_posts: Option<CardList>,
    suggestions: Vec<String>,
    response_revealed: bool,
    filter: Option<String>,
    posts: Option<CardList>,
}

impl Document {
    pub fn new(kind: PageKind) -> Document {
        return Document {
            kind,
            alerts: vec![],
            ai_response: "".to_string(),
            similar_posts: None,
            suggestions: vec![],
            response_revealed: false,
            filter: None,
            posts: None,
        };
    }

    pub fn alerts(&self) -> &[String] {
        return &self.alerts;
    }

    pub fn ai_response(&self) -> &str {
        return &self.ai_response;
    }

    pub fn similar_posts(&self) -> Option<&CardList> {
        return self.similar_posts.as_ref();
    }

    pub fn suggestions(&self) -> &[String] {
        return &self.suggestions;
    }

    pub fn is_response_revealed(&self) -> bool {
        return self.response_revealed;
    }

    pub fn filter(&self) -> Option<&str> {
        return self.filter.as_deref();
    }

    pub fn posts(&self) -> Option<&CardList> {
        return self.posts.as_ref();
    }

    fn render_region(list: &Option<CardList>) -> Result<String> {
        if let Some(list) = list {
            return Cards::render_list(list);
        }

        return Ok("".to_string());
    }

    /// Renders the full HTML page in its current state.
    pub fn render(&self) -> Result<String> {
        match self.kind {
            PageKind::Share => {
                let tmpl = ShareTemplate {
                    emotions: Emotion::iter().map(|e| return e.to_string()).collect(),
                    revealed: self.response_revealed,
                    ai_response: &self.ai_response,
                    similar_posts: Document::render_region(&self.similar_posts)?,
                    suggestions: Cards::render_suggestions(&self.suggestions)?,
                };

                return Ok(tmpl.render()?);
            }
            PageKind::Community => {
                let emotions = Emotion::iter()
                    .map(|e| {
                        let name = e.to_string();
                        return EmotionOption {
                            selected: self.filter.as_deref() == Some(name.as_str()),
                            name,
                        };
                    })
                    .collect();

                let tmpl = CommunityTemplate {
                    emotions,
                    posts: Document::render_region(&self.posts)?,
                };

                return Ok(tmpl.render()?);
            }
        }
    }
}

impl Page for Document {
    fn kind(&self) -> PageKind {
        return self.kind;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn set_ai_response(&mut self, text: &str) {
        self.ai_response = text.to_string();
    }

    fn set_similar_posts(&mut self, cards: CardList) {
        self.similar_posts = Some(cards);
    }

    fn set_suggestions(&mut self, suggestions: &[String]) {
        self.suggestions = suggestions.to_vec();
    }

    fn reveal_response_section(&mut self) {
        self.response_revealed = true;
    }

    fn set_filter_selection(&mut self, emotion: Option<&str>) {
        self.filter = emotion.map(|e| return e.to_string());
    }

    fn set_posts(&mut self, cards: CardList) {
        self.posts = Some(cards);
    }

    fn set_upvotes(&mut self, post_id: &str, upvotes: u64) -> bool {
        let mut touched = 0;
        if let Some(list) = self.similar_posts.as_mut() {
            touched += list.set_upvotes(post_id, upvotes);
        }
        if let Some(list) = self.posts.as_mut() {
            touched += list.set_upvotes(post_id, upvotes);
        }

        return touched > 0;
    }
}
