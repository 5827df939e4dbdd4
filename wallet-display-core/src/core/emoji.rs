//! Emoji handling for account avatars
//!
//! Labels may start with an emoji the user picked as avatar. Detection works
//! on extended grapheme clusters so that skin-tone modifiers, ZWJ sequences,
//! flags and keycaps are treated as one visual unit.
//!
//! Accounts without such an emoji get a default avatar hashed from their
//! address. The hash and the catalog below are pinned: changing either one
//! changes the avatar of every existing account.

use unicode_segmentation::UnicodeSegmentation;

use crate::shared::constants::AVATAR_PALETTE_SIZE;
use crate::shared::types::ColorIndex;

/// Default avatar catalog, indexed by the address hash
pub const AVATAR_EMOJIS: [&str; 35] = [
    "🌶", "🤑", "🐙", "🫐", "🐳", "🤶", "🌲", "🌞", "🐒", "🐵", "🦊", "🐼", "🦄", "🐷", "🐧",
    "🦩", "👽", "🎈", "🍉", "🎉", "🐲", "🌎", "🍊", "🐭", "🍣", "🐥", "👾", "🥦", "👹", "🙀",
    "⛱", "⛵️", "🥳", "🤯", "🤠",
];

const VARIATION_SELECTOR_16: char = '\u{FE0F}';
const COMBINING_KEYCAP: char = '\u{20E3}';

/// First extended grapheme cluster of `text`
pub fn first_grapheme(text: &str) -> Option<&str> {
    text.graphemes(true).next()
}

/// Whether a single grapheme cluster renders as an emoji
///
/// Symbols such as ©, ™ and the arrows default to text presentation and only
/// count when followed by VS16.
pub fn is_emoji(grapheme: &str) -> bool {
    let Some(first) = grapheme.chars().next() else {
        return false;
    };

    is_pictographic(first)
        || grapheme.contains(COMBINING_KEYCAP)
        || (grapheme.contains(VARIATION_SELECTOR_16)
            && (is_text_presentation(first) || !first.is_alphanumeric()))
}

/// Leading emoji of `text`, if it starts with one
pub fn first_emoji(text: &str) -> Option<&str> {
    first_grapheme(text).filter(|grapheme| is_emoji(grapheme))
}

/// `text` without its leading emoji
///
/// Whitespace directly after a removed emoji goes with it. Anything else,
/// including text without a leading emoji, is returned as is.
pub fn remove_first_emoji(text: &str) -> &str {
    match first_emoji(text) {
        Some(emoji) => text[emoji.len()..].trim_start(),
        None => text,
    }
}

/// Java-style 32-bit string hash over UTF-16 code units
pub fn hash_code(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

fn address_hash_index(address: &str, len: u32) -> u32 {
    (hash_code(&address.to_lowercase()) % len as i32).unsigned_abs()
}

/// Stable default avatar emoji for an address (case-insensitive)
pub fn address_hashed_emoji(address: &str) -> &'static str {
    AVATAR_EMOJIS[address_hash_index(address, AVATAR_EMOJIS.len() as u32) as usize]
}

/// Stable default avatar palette slot for an address (case-insensitive)
pub fn address_hashed_color_index(address: &str) -> ColorIndex {
    address_hash_index(address, AVATAR_PALETTE_SIZE)
}

// Approximation of the Unicode Extended_Pictographic property plus regional
// indicators, enough to classify the first scalar of a grapheme cluster.
// Text-presentation symbols are left out, see `is_text_presentation`.
fn is_pictographic(c: char) -> bool {
    matches!(
        c as u32,
        0x231A..=0x231B
            | 0x2328
            | 0x23CF
            | 0x23E9..=0x23F3
            | 0x23F8..=0x23FA
            | 0x24C2
            | 0x25AA..=0x25AB
            | 0x25B6
            | 0x25C0
            | 0x25FB..=0x25FE
            | 0x2600..=0x27BF
            | 0x2B1B..=0x2B1C
            | 0x2B50
            | 0x2B55
            | 0x3030
            | 0x303D
            | 0x3297
            | 0x3299
            | 0x1F000..=0x1FAFF
    )
}

// Pictographic symbols that render as text unless followed by VS16
fn is_text_presentation(c: char) -> bool {
    matches!(
        c as u32,
        0x00A9
            | 0x00AE
            | 0x203C
            | 0x2049
            | 0x2122
            | 0x2139
            | 0x2194..=0x2199
            | 0x21A9..=0x21AA
            | 0x2934..=0x2935
            | 0x2B05..=0x2B07
    )
}
