//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods.
//! [`CharacterRepo`] methods accept `&DbPool` and run one transaction per
//! call; [`CommentRepo`] methods operate on a connection so they can join
//! a transaction opened by the caller.

pub mod character_repo;
pub mod comment_repo;

pub use character_repo::CharacterRepo;
pub use comment_repo::CommentRepo;
