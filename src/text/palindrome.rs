//! Palindrome detection
//!
//! Only alphanumeric characters count and case is ignored, so
//! "A man, a plan, a canal: Panama" is a palindrome. Diagnostics go through
//! `tracing`; whichever subscriber the caller has in scope receives them.

use tracing::{instrument, trace};

/// Returns `true` if `text` reads the same backwards, ignoring case and
/// anything that is not a letter or digit
#[instrument(level = "debug", skip(text), fields(input_len = text.len()))]
pub fn is_palindrome(text: &str) -> bool {
    let cleaned: Vec<char> = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    let result = cleaned.iter().eq(cleaned.iter().rev());
    trace!(cleaned_len = cleaned.len(), result, "compared cleaned text");
    result
}
