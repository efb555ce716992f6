use std::collections::BTreeMap;

use crate::{
    foundation::{
        core::Rgba8,
        error::{AsciimageError, AsciimageResult},
    },
    parse::alphabet::Glyph,
};

/// Outline color and width. Width is in grid cells, so it scales with the render scale.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeStyle {
    pub color: Rgba8,
    #[serde(default = "default_stroke_width")]
    pub width: f64,
}

fn default_stroke_width() -> f64 {
    1.0
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Rgba8::BLACK,
            width: default_stroke_width(),
        }
    }
}

/// How one component is painted.
///
/// The default is a one-cell black outline with no fill. `erase` paints with destination-out
/// compositing, so the shape clears whatever was drawn beneath it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PaintStyle {
    pub stroke: Option<StrokeStyle>,
    pub fill: Option<Rgba8>,
    pub erase: bool,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            stroke: Some(StrokeStyle::default()),
            fill: None,
            erase: false,
        }
    }
}

impl PaintStyle {
    /// Width used to lay out geometry. Unstroked styles still count one cell, so a fill-only
    /// ellipse covers the same area as an outlined one.
    pub fn stroke_width(&self) -> f64 {
        self.stroke.map_or_else(default_stroke_width, |s| s.width)
    }
}

/// Chooses a [`PaintStyle`] for each component from its tag glyph.
///
/// Closures `Fn(Glyph) -> PaintStyle` implement this directly.
pub trait StyleSelector {
    fn style(&self, glyph: Glyph) -> PaintStyle;
}

impl<F> StyleSelector for F
where
    F: Fn(Glyph) -> PaintStyle,
{
    fn style(&self, glyph: Glyph) -> PaintStyle {
        self(glyph)
    }
}

/// The same stroke and fill for every component.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SolidStyle(pub PaintStyle);

impl SolidStyle {
    pub fn new(stroke: Option<StrokeStyle>, fill: Option<Rgba8>) -> Self {
        Self(PaintStyle {
            stroke,
            fill,
            erase: false,
        })
    }
}

impl StyleSelector for SolidStyle {
    fn style(&self, _glyph: Glyph) -> PaintStyle {
        self.0
    }
}

/// Per-glyph styles loaded from JSON.
///
/// ```json
/// {
///   "default": { "stroke": { "color": "#222" } },
///   "glyphs": {
///     "1": { "fill": "#000" },
///     "2": { "stroke": { "color": "#000", "width": 2 }, "erase": true }
///   }
/// }
/// ```
///
/// Glyphs without an entry use `default`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(try_from = "RawStyleSheet")]
pub struct StyleSheet {
    default: PaintStyle,
    glyphs: BTreeMap<Glyph, PaintStyle>,
}

#[derive(Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawStyleSheet {
    default: PaintStyle,
    glyphs: BTreeMap<String, PaintStyle>,
}

impl TryFrom<RawStyleSheet> for StyleSheet {
    type Error = AsciimageError;

    fn try_from(raw: RawStyleSheet) -> Result<Self, Self::Error> {
        let mut glyphs = BTreeMap::new();
        for (key, style) in raw.glyphs {
            let mut chars = key.chars();
            let glyph = match (chars.next(), chars.next()) {
                (Some(c), None) => Glyph::new(c),
                _ => None,
            }
            .ok_or_else(|| {
                AsciimageError::style(format!("stylesheet key '{key}' is not a glyph"))
            })?;
            glyphs.insert(glyph, style);
        }
        Ok(Self {
            default: raw.default,
            glyphs,
        })
    }
}

impl StyleSheet {
    pub fn from_json(s: &str) -> AsciimageResult<Self> {
        serde_json::from_str(s).map_err(|e| AsciimageError::style(format!("stylesheet: {e}")))
    }

    pub fn with_default(mut self, style: PaintStyle) -> Self {
        self.default = style;
        self
    }

    pub fn with_glyph(mut self, glyph: Glyph, style: PaintStyle) -> Self {
        self.glyphs.insert(glyph, style);
        self
    }
}

impl StyleSelector for StyleSheet {
    fn style(&self, glyph: Glyph) -> PaintStyle {
        self.glyphs.get(&glyph).copied().unwrap_or(self.default)
    }
}
