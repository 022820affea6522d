/// Display values of a single post card, already formatted. Content is kept
/// raw and only escaped when the card is rendered to markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostCard {
    pub post_id: String,
    pub icon_src: String,
    pub content: String,
    pub date: String,
    pub upvotes: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardList {
    Empty { placeholder: String },
    Cards(Vec<PostCard>),
}

impl CardList {
    pub fn new(cards: Vec<PostCard>, placeholder: &str) -> CardList {
        if cards.is_empty() {
            return CardList::Empty {
                placeholder: placeholder.to_string(),
            };
        }

        return CardList::Cards(cards);
    }

    pub fn cards(&self) -> &[PostCard] {
        match self {
            CardList::Empty { .. } => return &[],
            CardList::Cards(cards) => return cards,
        }
    }

    /// Updates the count of every card for `post_id`, returning how many
    /// cards were touched.
    pub fn set_upvotes(&mut self, post_id: &str, upvotes: u64) -> usize {
        let CardList::Cards(cards) = self else {
            return 0;
        };

        let mut touched = 0;
        for card in cards.iter_mut().filter(|c| return c.post_id == post_id) {
            card.upvotes = upvotes;
            touched += 1;
        }

        return touched;
    }
}
