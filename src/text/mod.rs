//! Text utilities

pub mod palindrome;

pub use palindrome::is_palindrome;
