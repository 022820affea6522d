mod api;
mod card;
mod emotion;
mod event;
mod page;
mod post;
mod storage;

pub use api::*;
pub use card::*;
pub use emotion::*;
pub use event::*;
pub use page::*;
pub use post::*;
pub use storage::*;
