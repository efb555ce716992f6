//! Turns per-glyph occurrences into typed components.
//!
//! Glyphs are visited in alphabet order. The occurrence count of a glyph decides its shape:
//!
//! | count | next glyph count | result                        |
//! |-------|------------------|-------------------------------|
//! | 0     | any              | nothing                       |
//! | 1     | 1                | starts (or continues) polygon |
//! | 1     | not 1            | point, or closes a polygon    |
//! | 2     | any              | line                          |
//! | 3+    | any              | ellipse over the bounding box |

use crate::{
    foundation::core::Cell,
    parse::{alphabet::Glyph, occurrences::OccurrenceIndex},
    scene::component::{Component, bounding_box},
};

struct PendingPolygon {
    tag: Glyph,
    vertices: Vec<Cell>,
}

/// Classifies every glyph in `occurrences`, returning components in alphabet order.
pub fn classify(occurrences: &OccurrenceIndex) -> Vec<Component> {
    let mut components = Vec::new();
    let mut pending: Option<PendingPolygon> = None;

    for glyph in Glyph::all() {
        let cells = occurrences.get(glyph);
        let next_count = occurrences.count(glyph.successor());

        if let Some(mut polygon) = pending.take() {
            // Entry into a polygon is gated on the next glyph having exactly one cell.
            debug_assert_eq!(cells.len(), 1, "glyph {glyph} inside a polygon run");
            polygon.vertices.extend(cells.first().copied());
            if next_count == 1 {
                pending = Some(polygon);
            } else {
                push(
                    &mut components,
                    Component::Polygon {
                        tag: polygon.tag,
                        vertices: polygon.vertices,
                    },
                );
            }
            continue;
        }

        match cells {
            [] => {}
            [at] if next_count == 1 => {
                pending = Some(PendingPolygon {
                    tag: glyph,
                    vertices: vec![*at],
                });
            }
            [at] => push(&mut components, Component::Point { tag: glyph, at: *at }),
            [from, to] => push(
                &mut components,
                Component::Line {
                    tag: glyph,
                    from: *from,
                    to: *to,
                },
            ),
            many => {
                if let Some((min, max)) = bounding_box(many) {
                    push(&mut components, Component::Ellipse { tag: glyph, min, max });
                }
            }
        }
    }

    debug_assert!(pending.is_none(), "polygon left open past the last glyph");
    components
}

fn push(components: &mut Vec<Component>, component: Component) {
    tracing::trace!(?component, "classified");
    components.push(component);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{occurrences::OccurrenceOrder, scanner::scan};

    fn classify_text(text: &str) -> Vec<Component> {
        let s = scan(text.chars()).unwrap();
        classify(&OccurrenceIndex::build(
            &s.observations,
            OccurrenceOrder::FirstObserved,
        ))
    }

    fn glyph(c: char) -> Glyph {
        Glyph::new(c).unwrap()
    }

    #[test]
    fn lone_singleton_is_a_point() {
        assert_eq!(
            classify_text(". 1\n. ."),
            vec![Component::Point {
                tag: glyph('1'),
                at: Cell::new(1, 0)
            }]
        );
    }

    #[test]
    fn pair_is_a_line_in_scan_order() {
        assert_eq!(
            classify_text(". 3\n3 ."),
            vec![Component::Line {
                tag: glyph('3'),
                from: Cell::new(1, 0),
                to: Cell::new(0, 1)
            }]
        );
    }

    #[test]
    fn three_or_more_cells_become_a_bounding_box_ellipse() {
        assert_eq!(
            classify_text(". a .\na . a\n. a ."),
            vec![Component::Ellipse {
                tag: glyph('a'),
                min: Cell::new(0, 0),
                max: Cell::new(2, 2)
            }]
        );
    }

    #[test]
    fn consecutive_singletons_chain_into_one_polygon() {
        let got = classify_text("1 . 2\n. . .\n4 . 3");
        assert_eq!(
            got,
            vec![Component::Polygon {
                tag: glyph('1'),
                vertices: vec![
                    Cell::new(0, 0),
                    Cell::new(2, 0),
                    Cell::new(2, 2),
                    Cell::new(0, 2)
                ]
            }]
        );
    }

    #[test]
    fn polygon_stops_at_a_multi_occurrence_glyph() {
        let got = classify_text("1 2 3\n4 4 .");
        assert_eq!(got.len(), 2);
        assert!(matches!(
            &got[0],
            Component::Polygon { tag, vertices } if *tag == glyph('1') && vertices.len() == 3
        ));
        assert!(matches!(&got[1], Component::Line { tag, .. } if *tag == glyph('4')));
    }

    #[test]
    fn polygon_runs_across_digit_letter_boundary() {
        let got = classify_text("8 9 A");
        assert_eq!(
            got,
            vec![Component::Polygon {
                tag: glyph('8'),
                vertices: vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)]
            }]
        );
    }

    #[test]
    fn polygon_ending_on_last_glyph_is_closed() {
        let got = classify_text("y z");
        assert_eq!(
            got,
            vec![Component::Polygon {
                tag: glyph('y'),
                vertices: vec![Cell::new(0, 0), Cell::new(1, 0)]
            }]
        );
    }

    #[test]
    fn lone_last_glyph_is_a_point() {
        assert_eq!(
            classify_text("z"),
            vec![Component::Point {
                tag: glyph('z'),
                at: Cell::new(0, 0)
            }]
        );
    }

    #[test]
    fn gap_in_alphabet_splits_runs() {
        let got = classify_text("1 2 . 4 5 6");
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].cells().len(), 2);
        assert_eq!(got[0].tag(), glyph('1'));
        assert_eq!(got[1].cells().len(), 3);
        assert_eq!(got[1].tag(), glyph('4'));
    }

    #[test]
    fn output_follows_alphabet_not_grid_order() {
        let got = classify_text("b b\na a");
        let tags: Vec<char> = got.iter().map(|c| c.tag().as_char()).collect();
        assert_eq!(tags, vec!['a', 'b']);
    }
}
