mod assets;
mod cards;
mod community_page;
mod document;
mod router;
mod session;
mod share_page;
mod upvotes;

pub use assets::*;
pub use cards::*;
pub use community_page::*;
pub use document::*;
pub use router::*;
pub use session::*;
pub use share_page::*;
pub use upvotes::*;
