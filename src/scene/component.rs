use crate::{foundation::core::Cell, parse::alphabet::Glyph};

/// Kind of a [`Component`], without its geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Point,
    Line,
    Polygon,
    Ellipse,
}

/// A geometric primitive recognized from glyph occurrences.
///
/// `tag` is the glyph the primitive was drawn with; for polygons it is the glyph of the first
/// vertex. Renderers pass it to the style selector.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Component {
    /// A glyph seen once.
    Point { tag: Glyph, at: Cell },
    /// A glyph seen twice; endpoints in occurrence order.
    Line { tag: Glyph, from: Cell, to: Cell },
    /// A run of consecutive single-occurrence glyphs, vertices in alphabet order.
    Polygon { tag: Glyph, vertices: Vec<Cell> },
    /// A glyph seen three or more times, stored as the corners of its bounding box.
    Ellipse { tag: Glyph, min: Cell, max: Cell },
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Point { .. } => ComponentKind::Point,
            Self::Line { .. } => ComponentKind::Line,
            Self::Polygon { .. } => ComponentKind::Polygon,
            Self::Ellipse { .. } => ComponentKind::Ellipse,
        }
    }

    pub fn tag(&self) -> Glyph {
        match self {
            Self::Point { tag, .. }
            | Self::Line { tag, .. }
            | Self::Polygon { tag, .. }
            | Self::Ellipse { tag, .. } => *tag,
        }
    }

    /// The geometry as a flat cell list: 1 for points, 2 for lines and ellipses, every vertex
    /// for polygons.
    pub fn cells(&self) -> Vec<Cell> {
        match self {
            Self::Point { at, .. } => vec![*at],
            Self::Line { from, to, .. } => vec![*from, *to],
            Self::Polygon { vertices, .. } => vertices.clone(),
            Self::Ellipse { min, max, .. } => vec![*min, *max],
        }
    }

    /// Smallest `(min, max)` cell pair covering the geometry.
    pub fn bounding_box(&self) -> (Cell, Cell) {
        match self {
            Self::Ellipse { min, max, .. } => (*min, *max),
            _ => bounding_box(&self.cells()).unwrap_or_default(),
        }
    }
}

/// Axis-aligned bounds of `cells`, or `None` when empty.
pub fn bounding_box(cells: &[Cell]) -> Option<(Cell, Cell)> {
    let (first, rest) = cells.split_first()?;
    Some(rest.iter().fold((*first, *first), |(min, max), c| {
        (
            Cell::new(min.column.min(c.column), min.row.min(c.row)),
            Cell::new(max.column.max(c.column), max.row.max(c.row)),
        )
    }))
}
