/// User interactions, keyed by the role of the element they come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageEvent {
    /// The page finished loading.
    Loaded,
    /// The share form was submitted.
    Submit { content: String, emotion: String },
    /// The filter button was clicked with the current selection.
    Filter { emotion: Option<String> },
    /// An upvote button was clicked on the card of `post_id`.
    Upvote { post_id: String },
}
