use serde::Serialize;

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Star {
    pub filled: bool,
}

/// Always five stars, the first `rating` of them filled.
pub fn stars(rating: u8) -> Vec<Star> {
    let rating = rating.min(MAX_RATING);
    (0..MAX_RATING)
        .map(|i| Star { filled: i < rating })
        .collect()
}
