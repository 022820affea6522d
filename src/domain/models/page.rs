use super::CardList;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PageKind {
    Share,
    Community,
}

/// The surface controllers patch with backend results. Every method maps to
/// one region of the page; nothing else is touched.
pub trait Page {
    fn kind(&self) -> PageKind;

    /// Blocking user-facing message.
    fn alert(&mut self, message: &str);

    /// Plain text, never interpreted as markup.
    fn set_ai_response(&mut self, text: &str);

    fn set_similar_posts(&mut self, cards: CardList);

    fn set_suggestions(&mut self, suggestions: &[String]);

    fn reveal_response_section(&mut self);

    /// Mirrors the filter control's current selection.
    fn set_filter_selection(&mut self, emotion: Option<&str>);

    /// Replaces the whole community listing.
    fn set_posts(&mut self, cards: CardList);

    /// Replaces the displayed count on the cards for `post_id`. Returns false
    /// when no card on the page shows that post.
    fn set_upvotes(&mut self, post_id: &str, upvotes: u64) -> bool;
}
