use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII word character, the same class JavaScript's `\w` matches
    static ref WORD_CHAR_REGEX: Regex = Regex::new(r"[A-Za-z0-9_]").unwrap();
}

/// Reading speed for plain text
pub const WORDS_PER_MINUTE: i64 = 275;

/// Tokens containing this count as embedded images
pub const IMAGE_MARKER: &str = "<img";

/// Words each image token is assumed to add to the raw count
const IMAGE_WORD_ADJUST: i64 = 4;

/// Seconds spent on the first image; each later one costs a second less
const FIRST_IMAGE_SECS: i64 = 12;

/// Floor for the per-image cost
const MIN_IMAGE_SECS: i64 = 3;

/// Raw counts the estimate is computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadingStats {
    pub words: usize,
    pub images: usize,
}

/// Count words and image tokens, splitting on single spaces only
pub fn count_words(content: &str) -> ReadingStats {
    let mut stats = ReadingStats::default();

    for token in content.split(' ') {
        if token.contains(IMAGE_MARKER) {
            stats.images += 1;
        }
        if WORD_CHAR_REGEX.is_match(token) {
            stats.words += 1;
        }
    }

    stats
}

/// Extra viewing time for `images` images: 12s, 11s, ... never below 3s each
pub fn image_seconds(images: usize) -> i64 {
    let mut factor = FIRST_IMAGE_SECS;
    let mut total = 0;

    for _ in 0..images {
        total += factor;
        if factor > MIN_IMAGE_SECS {
            factor -= 1;
        }
    }

    total
}

/// Estimated reading time in whole minutes, rounded up.
///
/// `ceil(((words - 4 * images) / WPS + image_secs) / 60)` with
/// `WPS = 275 / 60`, evaluated over integers so exact minute boundaries
/// don't round up on floating-point noise. An empty body reads in 0 minutes.
pub fn reading_time(content: &str) -> u32 {
    minutes_for(count_words(content))
}

pub fn minutes_for(stats: ReadingStats) -> u32 {
    let words = stats.words as i64;
    let images = stats.images as i64;

    // total seconds scaled by WORDS_PER_MINUTE
    let scaled_secs = (words - IMAGE_WORD_ADJUST * images) * 60
        + image_seconds(stats.images) * WORDS_PER_MINUTE;

    ceil_div(scaled_secs, WORDS_PER_MINUTE * 60).max(0) as u32
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator.div_euclid(denominator);
    if numerator.rem_euclid(denominator) == 0 {
        quotient
    } else {
        quotient + 1
    }
}
