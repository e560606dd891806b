//! Domain entities - the content the site serves.

mod blog;

mod contact;

mod game;

mod newsletter;

mod user;

pub use blog::{BlogPost, DEFAULT_AUTHOR, DEFAULT_PUBLISHED, DEFAULT_READ_TIME, NewBlogPost};
pub use contact::{ContactMessage, NewContactMessage};
pub use game::{Game, GameStatus};
pub use newsletter::{NewSubscriber, NewsletterSubscriber};
pub use user::{NewUser, User};
