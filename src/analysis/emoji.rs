//! Which characters count as emoji.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

// Pictographs, skin-tone modifiers and flag halves. Joiners and variation
// selectors are not emoji on their own.
static UNICODE_EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Extended_Pictographic}\p{Emoji_Modifier}\x{1F1E6}-\x{1F1FF}]$")
        .expect("emoji pattern is valid")
});

#[derive(Debug, Clone)]
enum Table {
    Unicode(&'static Regex),
    Chars(HashSet<char>),
}

/// Per-character emoji membership test.
///
/// Emoji are counted one `char` at a time, so a ZWJ family sequence
/// contributes each of its pictographs separately.
///
/// # Example
///
/// ```rust
/// use chatlens::analysis::EmojiSet;
///
/// let set = EmojiSet::unicode();
/// assert!(set.contains('😊'));
/// assert!(!set.contains('a'));
///
/// let hearts = EmojiSet::from_chars(['❤', '💙']);
/// assert_eq!(hearts.filter("I ❤ you 😊"), "❤");
/// ```
#[derive(Debug, Clone)]
pub struct EmojiSet {
    table: Table,
}

impl EmojiSet {
    /// Unicode `Extended_Pictographic`, `Emoji_Modifier` and regional
    /// indicator characters.
    pub fn unicode() -> Self {
        Self {
            table: Table::Unicode(&*UNICODE_EMOJI),
        }
    }

    /// An explicit character table.
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self {
            table: Table::Chars(chars.into_iter().collect()),
        }
    }

    /// Returns `true` if `c` is in the set.
    pub fn contains(&self, c: char) -> bool {
        match &self.table {
            Table::Unicode(regex) => {
                let mut buf = [0u8; 4];
                regex.is_match(c.encode_utf8(&mut buf))
            }
            Table::Chars(chars) => chars.contains(&c),
        }
    }

    /// The emoji characters of `text`, in order, concatenated.
    pub fn filter(&self, text: &str) -> String {
        text.chars().filter(|&c| self.contains(c)).collect()
    }
}

impl Default for EmojiSet {
    fn default() -> Self {
        Self::unicode()
    }
}
