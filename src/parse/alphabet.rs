//! The ordered glyph alphabet.
//!
//! Traversal order is `1`-`9`, `A`-`Z`, `a`-`z`. The order decides which glyphs chain into
//! polygons and the paint order of the resulting components.

const SYMBOLS: &[u8; GLYPH_COUNT] =
    b"123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Number of glyphs in the alphabet.
pub const GLYPH_COUNT: usize = 61;

/// One alphabet symbol. Only constructible for characters that are in the alphabet.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(into = "char")]
pub struct Glyph(u8);

impl Glyph {
    /// The first glyph (`1`).
    pub const FIRST: Self = Self(SYMBOLS[0]);
    /// The last glyph (`z`).
    pub const LAST: Self = Self(SYMBOLS[GLYPH_COUNT - 1]);

    /// Returns the glyph for `c`, or `None` for characters outside the alphabet.
    pub fn new(c: char) -> Option<Self> {
        let b = u8::try_from(c).ok()?;
        index_of(b).map(|_| Self(b))
    }

    /// Position of this glyph in traversal order (`0..GLYPH_COUNT`).
    pub fn index(self) -> usize {
        // Construction guarantees membership.
        index_of(self.0).unwrap_or(GLYPH_COUNT)
    }

    /// Glyph at traversal position `index`.
    pub fn from_index(index: usize) -> Option<Self> {
        SYMBOLS.get(index).map(|&b| Self(b))
    }

    /// The next glyph in traversal order.
    ///
    /// `None` after the last glyph; that sentinel never has occurrences, which is what closes
    /// a polygon still open at the end of the alphabet.
    pub fn successor(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn as_char(self) -> char {
        char::from(self.0)
    }

    /// All glyphs in traversal order.
    pub fn all() -> impl Iterator<Item = Self> {
        SYMBOLS.iter().map(|&b| Self(b))
    }
}

fn index_of(b: u8) -> Option<usize> {
    match b {
        b'1'..=b'9' => Some(usize::from(b - b'1')),
        b'A'..=b'Z' => Some(9 + usize::from(b - b'A')),
        b'a'..=b'z' => Some(35 + usize::from(b - b'a')),
        _ => None,
    }
}

impl From<Glyph> for char {
    fn from(g: Glyph) -> Self {
        g.as_char()
    }
}

impl std::fmt::Debug for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Glyph({:?})", self.as_char())
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
