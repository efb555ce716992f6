use crate::foundation::error::{AsciimageError, AsciimageResult};

pub use kurbo::{Affine, BezPath, Point, Rect};

/// A grid cell address: `column` grows rightward, `row` grows downward, both 0-based.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Cell {
    pub column: u32,
    pub row: u32,
}

impl Cell {
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// The cell's origin in grid units, before any render transform.
    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.column), f64::from(self.row))
    }
}

/// Size of a parsed grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Extent {
    pub rows: u32,
    pub columns: u32,
}

impl Extent {
    pub const EMPTY: Self = Self {
        rows: 0,
        columns: 0,
    };

    pub const fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    pub const fn is_valid(self) -> bool {
        self.rows != 0 && self.columns != 0
    }
}

/// Straight-alpha RGBA8 color, written as `#rgb`, `#rrggbb` or `#rrggbbaa` in stylesheets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn from_hex(s: &str) -> AsciimageResult<Self> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if !digits.is_ascii() {
            return Err(AsciimageError::style(format!("invalid color '{s}'")));
        }
        let channel = |range: std::ops::Range<usize>| -> AsciimageResult<u8> {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| AsciimageError::style(format!("invalid color '{s}'")))
        };
        let short = |i: usize| -> AsciimageResult<u8> { channel(i..i + 1).map(|v| v * 17) };

        match digits.len() {
            3 => Ok(Self::opaque(short(0)?, short(1)?, short(2)?)),
            6 => Ok(Self::opaque(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(AsciimageError::style(format!(
                "invalid color '{s}' (expected #rgb, #rrggbb or #rrggbbaa)"
            ))),
        }
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl std::str::FromStr for Rgba8 {
    type Err = AsciimageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = AsciimageError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Rgba8> for String {
    fn from(c: Rgba8) -> Self {
        c.to_hex()
    }
}
