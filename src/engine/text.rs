//! Clean-up applied to raw player input before it is matched against exits.

/// Removes every ASCII punctuation character; whitespace and everything else is kept in order.
pub fn remove_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Removes leading and trailing whitespace. Inner runs of whitespace are untouched.
pub fn trim(text: &str) -> String {
    text.trim().to_string()
}

/// Punctuation removal, then trimming, then lowercasing.
///
/// ```
/// use campus_walk::engine::normalize;
///
/// assert_eq!(normalize("  Go south! "), "go south");
/// assert_eq!(normalize("!!! tAkE,. LAmp!?! "), "take lamp");
/// ```
pub fn normalize(text: &str) -> String {
    trim(&remove_punctuation(text)).to_lowercase()
}
