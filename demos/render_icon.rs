use asciimage::{Scene, StyleSheet, render};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let scene = Scene::parse(include_str!("../tests/data/circle_x.txt"));
    let sheet = StyleSheet::from_json(include_str!("../tests/data/circle_x_style.json"))?;
    let image = render(&scene, 16, &sheet)?;

    let out = std::path::Path::new("target/demos/circle_x.png");
    image.save_png(out)?;
    println!("wrote {} ({}x{})", out.display(), image.width, image.height);
    Ok(())
}
