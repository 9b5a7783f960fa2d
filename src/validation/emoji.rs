//! Emoji prefix detection

use std::ops::RangeInclusive;

/// Codepoint blocks accepted as a leading emoji.
pub const EMOJI_RANGES: [RangeInclusive<u32>; 11] = [
    0x1F600..=0x1F64F, // Emoticons
    0x1F300..=0x1F5FF, // Miscellaneous Symbols and Pictographs
    0x1F680..=0x1F6FF, // Transport and Map Symbols
    0x1F1E0..=0x1F1FF, // Regional Indicator Symbols
    0x2600..=0x26FF,   // Miscellaneous Symbols
    0x2700..=0x27BF,   // Dingbats
    0x1F900..=0x1F9FF, // Supplemental Symbols and Pictographs
    0x1FA00..=0x1FA6F, // Chess Symbols
    0x1F004..=0x1F0CF, // Mahjong tiles through playing cards
    0x2300..=0x23FF,   // Miscellaneous Technical
    0x2B00..=0x2BFF,   // Miscellaneous Symbols and Arrows
];

/// Whether a single character lies in one of the [`EMOJI_RANGES`]
pub fn is_emoji(c: char) -> bool {
    let code = u32::from(c);
    EMOJI_RANGES.iter().any(|range| range.contains(&code))
}

/// Whether the first character of `name` is an emoji.
///
/// No normalization or trimming: a leading space makes the name
/// non-compliant.
pub fn starts_with_emoji(name: &str) -> bool {
    name.chars().next().is_some_and(is_emoji)
}
