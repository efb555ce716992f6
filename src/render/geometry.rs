//! Component geometry in grid units.
//!
//! Cell `(c, r)` maps to point `(c, r)`; the renderer applies scale and the half-cell offset.

use kurbo::Shape as _;

use crate::{
    foundation::core::{BezPath, Point, Rect},
    scene::component::Component,
};

/// Flattening tolerance for curved outlines, in grid units.
const CURVE_TOLERANCE: f64 = 0.01;

/// What the rasterizer draws for a component.
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    /// A square dot painted with the stroke color.
    Dot(Rect),
    /// Stroked only.
    Open(BezPath),
    /// Filled, then stroked.
    Closed(BezPath),
}

/// Builds the outline of `component` for a stroke `stroke_width` cells wide.
pub fn outline(component: &Component, stroke_width: f64) -> Outline {
    match component {
        Component::Point { at, .. } => Outline::Dot(Rect::from_center_size(
            at.to_point(),
            (stroke_width, stroke_width),
        )),
        Component::Line { from, to, .. } => {
            let mut path = BezPath::new();
            path.move_to(from.to_point());
            path.line_to(to.to_point());
            Outline::Open(path)
        }
        Component::Polygon { vertices, .. } => {
            let mut path = BezPath::new();
            let mut points = vertices.iter().map(|c| c.to_point());
            if let Some(first) = points.next() {
                path.move_to(first);
                points.for_each(|p| path.line_to(p));
                path.close_path();
            }
            Outline::Closed(path)
        }
        Component::Ellipse { min, max, .. } => {
            let bounds = ellipse_bounds(min.to_point(), max.to_point(), stroke_width);
            Outline::Closed(kurbo::Ellipse::from_rect(bounds).to_path(CURVE_TOLERANCE))
        }
    }
}

/// The ellipse spans whole cells from `min` to `max`, shrunk on the far sides by the stroke
/// width so the outline stays inside the covered cells.
fn ellipse_bounds(min: Point, max: Point, stroke_width: f64) -> Rect {
    Rect::new(
        min.x,
        min.y,
        max.x + 1.0 - stroke_width,
        max.y + 1.0 - stroke_width,
    )
    .abs()
}

#[cfg(test)]
mod tests {
    use kurbo::Shape as _;

    use super::*;
    use crate::{foundation::core::Cell, parse::alphabet::Glyph};

    fn tag() -> Glyph {
        Glyph::FIRST
    }

    #[test]
    fn point_is_a_stroke_sized_square() {
        let o = outline(
            &Component::Point {
                tag: tag(),
                at: Cell::new(2, 3),
            },
            2.0,
        );
        assert_eq!(o, Outline::Dot(Rect::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn line_is_an_open_two_point_path() {
        let Outline::Open(path) = outline(
            &Component::Line {
                tag: tag(),
                from: Cell::new(0, 0),
                to: Cell::new(4, 2),
            },
            1.0,
        ) else {
            panic!("line should be open");
        };
        assert_eq!(path.elements().len(), 2);
        assert_eq!(path.bounding_box(), Rect::new(0.0, 0.0, 4.0, 2.0));
    }

    #[test]
    fn polygon_is_closed_through_every_vertex() {
        let Outline::Closed(path) = outline(
            &Component::Polygon {
                tag: tag(),
                vertices: vec![Cell::new(0, 0), Cell::new(3, 0), Cell::new(3, 3)],
            },
            1.0,
        ) else {
            panic!("polygon should be closed");
        };
        // move, 2 lines, close
        assert_eq!(path.elements().len(), 4);
        assert!(matches!(path.elements().last(), Some(kurbo::PathEl::ClosePath)));
    }

    #[test]
    fn ellipse_is_inset_by_stroke_width() {
        let Outline::Closed(path) = outline(
            &Component::Ellipse {
                tag: tag(),
                min: Cell::new(1, 1),
                max: Cell::new(5, 3),
            },
            1.0,
        ) else {
            panic!("ellipse should be closed");
        };
        let bb = path.bounding_box();
        assert!((bb.x0 - 1.0).abs() < 1e-6);
        assert!((bb.y0 - 1.0).abs() < 1e-6);
        assert!((bb.x1 - 5.0).abs() < 1e-6);
        assert!((bb.y1 - 3.0).abs() < 1e-6);
    }

    #[test]
    fn ellipse_bounds_never_invert() {
        let r = ellipse_bounds(Point::new(0.0, 0.0), Point::new(0.0, 0.0), 3.0);
        assert!(r.width() >= 0.0 && r.height() >= 0.0);
    }
}
