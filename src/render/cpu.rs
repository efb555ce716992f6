use crate::{
    foundation::{
        core::{Affine, BezPath, Point, Rect, Rgba8},
        error::{AsciimageError, AsciimageResult},
    },
    render::{
        geometry::{Outline, outline},
        raster::RasterImage,
        style::{PaintStyle, SolidStyle, StrokeStyle, StyleSelector},
    },
    scene::{component::Component, model::Scene},
};

/// Renderer-wide settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// If set, the image is cleared to this color before drawing; otherwise it is transparent.
    pub background: Option<Rgba8>,
}

/// Renders `scene` at `scale` pixels per cell, asking `styles` how to paint each component.
///
/// Invalid scenes, and a zero scale, produce [`RasterImage::empty`].
pub fn render<S>(scene: &Scene, scale: u32, styles: &S) -> AsciimageResult<RasterImage>
where
    S: StyleSelector + ?Sized,
{
    render_with(scene, scale, styles, &RenderSettings::default())
}

/// Renders with one stroke and fill for every component.
pub fn render_solid(
    scene: &Scene,
    scale: u32,
    stroke: Option<StrokeStyle>,
    fill: Option<Rgba8>,
) -> AsciimageResult<RasterImage> {
    render(scene, scale, &SolidStyle::new(stroke, fill))
}

#[tracing::instrument(skip(scene, styles), fields(rows = scene.rows(), columns = scene.columns()))]
pub fn render_with<S>(
    scene: &Scene,
    scale: u32,
    styles: &S,
    settings: &RenderSettings,
) -> AsciimageResult<RasterImage>
where
    S: StyleSelector + ?Sized,
{
    if !scene.is_valid() || scale == 0 {
        tracing::debug!("nothing to render");
        return Ok(RasterImage::empty());
    }

    let width = surface_dim(scene.columns(), scale, "width")?;
    let height = surface_dim(scene.rows(), scale, "height")?;

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    if let Some(bg) = settings.background {
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(bg));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));
    }

    // Cell centers land on pixel centers of the scaled grid.
    let grid = Affine::scale(f64::from(scale)) * Affine::translate((0.5, 0.5));
    for component in scene.components() {
        let style = styles.style(component.tag());
        draw_component(&mut ctx, grid, component, &style);
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);

    Ok(RasterImage {
        width: u32::from(width),
        height: u32::from(height),
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn surface_dim(cells: u32, scale: u32, what: &str) -> AsciimageResult<u16> {
    cells
        .checked_mul(scale)
        .and_then(|px| u16::try_from(px).ok())
        .ok_or_else(|| {
            AsciimageError::render(format!(
                "image {what} of {cells} cells at scale {scale} exceeds {} pixels",
                u16::MAX
            ))
        })
}

fn draw_component(
    ctx: &mut vello_cpu::RenderContext,
    grid: Affine,
    component: &Component,
    style: &PaintStyle,
) {
    ctx.set_transform(affine_to_cpu(grid));
    ctx.set_blend_mode(if style.erase {
        vello_cpu::peniko::BlendMode::new(
            vello_cpu::peniko::Mix::Normal,
            vello_cpu::peniko::Compose::DestOut,
        )
    } else {
        vello_cpu::peniko::BlendMode::default()
    });

    match outline(component, style.stroke_width()) {
        Outline::Dot(rect) => {
            if let Some(stroke) = style.stroke {
                ctx.set_paint(color_to_cpu(stroke.color));
                ctx.fill_rect(&rect_to_cpu(rect));
            }
        }
        Outline::Open(path) => {
            if let Some(stroke) = style.stroke {
                stroke_path(ctx, &path, stroke);
            }
        }
        Outline::Closed(path) => {
            if let Some(fill) = style.fill {
                // Self-intersecting chains leave their overlap hollow.
                ctx.set_fill_rule(vello_cpu::peniko::Fill::EvenOdd);
                ctx.set_paint(color_to_cpu(fill));
                ctx.fill_path(&bezpath_to_cpu(&path));
            }
            if let Some(stroke) = style.stroke {
                stroke_path(ctx, &path, stroke);
            }
        }
    }
}

fn stroke_path(ctx: &mut vello_cpu::RenderContext, path: &BezPath, stroke: StrokeStyle) {
    if stroke.width <= 0.0 {
        return;
    }
    ctx.set_stroke(
        vello_cpu::kurbo::Stroke::new(stroke.width)
            .with_caps(vello_cpu::kurbo::Cap::Square)
            .with_join(vello_cpu::kurbo::Join::Bevel),
    );
    ctx.set_paint(color_to_cpu(stroke.color));
    ctx.stroke_path(&bezpath_to_cpu(path));
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
