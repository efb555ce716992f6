use asciimage::{Cell, Component, ComponentKind, Extent, Glyph, OccurrenceOrder, ParseOptions, Scene};

fn glyph(c: char) -> Glyph {
    Glyph::new(c).unwrap()
}

#[test]
fn four_corners_make_one_ellipse() {
    let scene = Scene::parse("1 1\n1 1\n");
    assert!(scene.is_valid());
    assert_eq!(scene.extent(), Extent::new(2, 2));
    assert_eq!(
        scene.components(),
        &[Component::Ellipse {
            tag: glyph('1'),
            min: Cell::new(0, 0),
            max: Cell::new(1, 1),
        }]
    );
}

#[test]
fn crossing_pairs_make_two_lines() {
    let scene = Scene::parse("1 2\n2 1\n");
    assert!(scene.is_valid());
    assert_eq!(scene.extent(), Extent::new(2, 2));
    assert_eq!(
        scene.components(),
        &[
            Component::Line {
                tag: glyph('1'),
                from: Cell::new(0, 0),
                to: Cell::new(1, 1),
            },
            Component::Line {
                tag: glyph('2'),
                from: Cell::new(1, 0),
                to: Cell::new(0, 1),
            },
        ]
    );
}

#[test]
fn consecutive_singletons_run_until_the_chain_breaks() {
    // `3` continues the run because `3` itself occurs once; `4` (absent) closes it.
    let scene = Scene::parse("1 2 3\n");
    assert_eq!(scene.extent(), Extent::new(1, 3));
    assert_eq!(
        scene.components(),
        &[Component::Polygon {
            tag: glyph('1'),
            vertices: vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)],
        }]
    );
}

#[test]
fn two_singleton_run_then_lone_point() {
    let scene = Scene::parse("1 2 . 4\n");
    let kinds: Vec<_> = scene.components().iter().map(Component::kind).collect();
    assert_eq!(kinds, vec![ComponentKind::Polygon, ComponentKind::Point]);
    assert_eq!(scene.components()[0].cells().len(), 2);
    assert_eq!(scene.components()[1].tag(), glyph('4'));
}

#[test]
fn uneven_rows_invalidate_everything() {
    let scene = Scene::parse("1 1\n1");
    assert!(!scene.is_valid());
    assert_eq!(scene.extent(), Extent::EMPTY);
    assert!(scene.components().is_empty());
}

#[test]
fn empty_input_is_invalid() {
    let scene = Scene::parse("");
    assert!(!scene.is_valid());
    assert_eq!(scene.extent(), Extent::new(0, 0));
}

#[test]
fn parsing_is_deterministic() {
    let text = include_str!("data/circle_x.txt");
    assert_eq!(Scene::parse(text), Scene::parse(text));
}

#[test]
fn circle_with_cross_fixture() {
    let scene = Scene::parse(include_str!("data/circle_x.txt"));
    assert_eq!(scene.extent(), Extent::new(11, 11));
    let summary: Vec<(char, ComponentKind)> = scene
        .components()
        .iter()
        .map(|c| (c.tag().as_char(), c.kind()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ('1', ComponentKind::Ellipse),
            ('2', ComponentKind::Line),
            ('3', ComponentKind::Line),
        ]
    );
    assert_eq!(
        scene.components()[0].bounding_box(),
        (Cell::new(0, 0), Cell::new(10, 10))
    );
}

#[test]
fn arrow_fixture_is_one_polygon_in_alphabet_order() {
    let scene = Scene::parse(include_str!("data/arrow.txt"));
    assert_eq!(scene.extent(), Extent::new(12, 12));
    assert_eq!(
        scene.components(),
        &[Component::Polygon {
            tag: glyph('1'),
            vertices: vec![
                Cell::new(4, 1),
                Cell::new(8, 4),
                Cell::new(8, 7),
                Cell::new(4, 6),
                Cell::new(4, 10),
            ],
        }]
    );
}

#[test]
fn ellipse_box_contains_every_occurrence() {
    let text = ". . a . .\na . . . .\n. . . . a\n. a . . .";
    let scene = Scene::parse(text);
    let (min, max) = scene.components()[0].bounding_box();
    assert_eq!((min, max), (Cell::new(0, 0), Cell::new(4, 3)));
}

#[test]
fn every_row_width_matches_extent() {
    let text = "1 . . 2\n. . . .\n2 . . 1";
    let scene = Scene::parse(text);
    for row in text.lines() {
        let width = row.chars().filter(|c| !c.is_whitespace()).count() as u32;
        assert_eq!(width, scene.columns());
    }
    assert_eq!(scene.rows(), 3);
}

#[test]
fn last_observed_order_is_opt_in() {
    let opts = ParseOptions {
        order: OccurrenceOrder::LastObserved,
    };
    let scene = Scene::parse_with("1 2\n2 1\n", &opts);
    assert_eq!(
        scene.components()[0],
        Component::Line {
            tag: glyph('1'),
            from: Cell::new(1, 1),
            to: Cell::new(0, 0),
        }
    );
}
