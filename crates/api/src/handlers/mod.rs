pub mod character;
pub mod comment;
