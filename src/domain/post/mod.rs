pub mod entity;
pub mod repository;
pub mod services;
pub mod slug;
pub mod specifications;
pub mod value_objects;

pub use entity::{AuthorSummary, NewPost, Post, PostUpdate, PostWithAuthor};
pub use repository::{PostReadRepository, PostWriteRepository};
pub use self::slug::{make_slug, make_unique_slug};
pub use value_objects::{HtmlContent, MarkdownContent, PostId, PostSlug, PostTitle};
