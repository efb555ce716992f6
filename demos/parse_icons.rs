use asciimage::{ComponentKind, Scene};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    for (name, text) in [
        ("circle_x", include_str!("../tests/data/circle_x.txt")),
        ("arrow", include_str!("../tests/data/arrow.txt")),
    ] {
        let scene = Scene::try_parse(text, &Default::default())?;
        let ellipses = scene
            .components()
            .iter()
            .filter(|c| c.kind() == ComponentKind::Ellipse)
            .count();
        println!(
            "{name}: {}x{} cells, {} components ({ellipses} ellipses)",
            scene.columns(),
            scene.rows(),
            scene.components().len()
        );
    }

    Ok(())
}
