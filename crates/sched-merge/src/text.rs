//! Text decoding applied while merging.

/// Decode underscore-encoded spaces left behind by upstream normalization.
#[must_use]
pub fn decode_underscores(text: &str) -> String {
    text.replace('_', " ")
}

/// [`decode_underscores`] over an optional field.
#[must_use]
pub fn decode_opt(text: Option<String>) -> Option<String> {
    text.map(|text| decode_underscores(&text))
}
