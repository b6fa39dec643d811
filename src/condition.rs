//! Condition-code classification
//!
//! The weather service reports a numeric condition code per observation
//! (2xx thunderstorm, 3xx drizzle, 5xx rain, 6xx snow, 7xx atmosphere,
//! 800 clear, 80x clouds). Two independent tables map a code to the emoji
//! and the frame background shown for it.

use std::ops::RangeInclusive;

use ratatui::style::Color;

/// An sRGB colour triple
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Relative brightness in `0.0..=1.0` (ITU-R BT.601 weights)
    pub fn luma(self) -> f32 {
        let Rgb(r, g, b) = self;
        (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) / 255.0
    }

    /// Readable foreground colour on top of this background
    pub fn contrast(self) -> Color {
        if self.luma() < 0.5 {
            Color::White
        } else {
            Color::Black
        }
    }
}

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Color::Rgb(r, g, b)
    }
}

const EMOJI_TABLE: &[(RangeInclusive<i64>, &str)] = &[
    (200..=232, "⛈️"),
    (300..=321, "🌦️"),
    (500..=531, "🌧️"),
    (600..=622, "🌨️"),
    (701..=741, "🌫️"),
    (761..=761, "💨"),
    (762..=762, "🌋"),
    (781..=781, "🌪️"),
    (800..=800, "☀️"),
    (801..=804, "☁️"),
];

const BACKGROUND_TABLE: &[(RangeInclusive<i64>, Rgb)] = &[
    (200..=232, Rgb(70, 70, 70)),
    (300..=321, Rgb(173, 216, 230)),
    (500..=531, Rgb(0, 0, 139)),
    (600..=622, Rgb(240, 248, 255)),
    (701..=741, Rgb(169, 169, 169)),
    (761..=761, Rgb(192, 192, 192)),
    (762..=762, Rgb(139, 69, 19)),
    (781..=781, Rgb(105, 105, 105)),
    (800..=800, Rgb(135, 206, 250)),
    (801..=804, Rgb(211, 211, 211)),
];

fn lookup<T: Copy>(table: &[(RangeInclusive<i64>, T)], code: i64, fallback: T) -> T {
    table
        .iter()
        .find(|(range, _)| range.contains(&code))
        .map(|(_, value)| *value)
        .unwrap_or(fallback)
}

/// Emoji for a condition code; empty for codes outside the vocabulary
pub fn weather_emoji(code: i64) -> &'static str {
    lookup(EMOJI_TABLE, code, "")
}

/// Background colour for a condition code; white for codes outside the vocabulary
pub fn weather_background(code: i64) -> Rgb {
    lookup(BACKGROUND_TABLE, code, Rgb::WHITE)
}

/// Both presentation attributes of a condition code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub emoji: &'static str,
    pub background: Rgb,
}

pub fn classify(code: i64) -> Classification {
    Classification {
        emoji: weather_emoji(code),
        background: weather_background(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thunderstorm_range() {
        for code in 200..=232 {
            assert_eq!(weather_emoji(code), "⛈️");
            assert_eq!(weather_background(code), Rgb(70, 70, 70));
        }
    }

    #[test]
    fn test_rain_range() {
        for code in 500..=531 {
            assert_eq!(weather_emoji(code), "🌧️");
            assert_eq!(weather_background(code), Rgb(0, 0, 139));
        }
    }

    #[test]
    fn test_clear_sky() {
        assert_eq!(
            classify(800),
            Classification {
                emoji: "☀️",
                background: Rgb(135, 206, 250),
            }
        );
    }

    #[test]
    fn test_single_code_entries() {
        assert_eq!(classify(761).emoji, "💨");
        assert_eq!(classify(762).emoji, "🌋");
        assert_eq!(classify(762).background, Rgb(139, 69, 19));
        assert_eq!(classify(781).emoji, "🌪️");
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        for code in [0, 199, 233, 400, 532, 700, 742, 760, 799, 805, 999, -1, 70_000, i64::MAX] {
            assert_eq!(classify(code).emoji, "", "code {}", code);
            assert_eq!(classify(code).background, Rgb::WHITE, "code {}", code);
        }
    }

    #[test]
    fn test_tables_do_not_overlap() {
        for code in 0..=1000i64 {
            let emoji_hits = EMOJI_TABLE.iter().filter(|(r, _)| r.contains(&code)).count();
            let bg_hits = BACKGROUND_TABLE
                .iter()
                .filter(|(r, _)| r.contains(&code))
                .count();
            assert!(emoji_hits <= 1, "code {} matched {} emoji ranges", code, emoji_hits);
            assert_eq!(emoji_hits, bg_hits, "tables disagree on code {}", code);
        }
    }

    #[test]
    fn test_classify_is_stable() {
        assert_eq!(classify(501), classify(501));
    }

    #[test]
    fn test_contrast() {
        assert_eq!(Rgb(0, 0, 139).contrast(), Color::White);
        assert_eq!(Rgb::WHITE.contrast(), Color::Black);
        assert_eq!(Rgb(135, 206, 250).contrast(), Color::Black);
    }
}
