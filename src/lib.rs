//! Asciimage turns ASCII-art icons into typed vector scenes and renders them.
//!
//! An image is a grid of single-character cells. Glyphs from the alphabet `1`-`9`, `A`-`Z`,
//! `a`-`z` mark shapes; any other non-whitespace character (conventionally `.`) is a blank
//! cell. How often a glyph occurs decides what it draws:
//!
//! - once: a point, or a polygon vertex when the next glyph also occurs once
//! - twice: a line between the two cells
//! - three or more times: an ellipse inscribed in the cells' bounding box
//!
//! ```
//! let scene = asciimage::Scene::parse(
//!     ". 1 .\n\
//!      1 . 1\n\
//!      . 1 .\n",
//! );
//! assert!(scene.is_valid());
//! assert_eq!(scene.components().len(), 1);
//! assert_eq!(scene.components()[0].kind(), asciimage::ComponentKind::Ellipse);
//! ```
//!
//! Parsing is lenient: an uneven grid gives an invalid [`Scene`] rather than an error. Use
//! [`Scene::try_parse`] to learn why a grid was rejected.
//!
//! Rendering goes through a [`StyleSelector`], which picks a [`PaintStyle`] per component from
//! the glyph that drew it, and produces premultiplied RGBA8 pixels via `vello_cpu`.
#![forbid(unsafe_code)]

mod foundation;
mod parse;
mod render;
mod scene;

pub use foundation::core::{Cell, Extent, Rgba8};
pub use foundation::error::{AsciimageError, AsciimageResult};
pub use parse::alphabet::{GLYPH_COUNT, Glyph};
pub use parse::occurrences::OccurrenceOrder;
pub use parse::scanner::ROW_SEPARATOR;
pub use render::cpu::{RenderSettings, render, render_solid, render_with};
pub use render::raster::RasterImage;
pub use render::style::{PaintStyle, SolidStyle, StrokeStyle, StyleSelector, StyleSheet};
pub use scene::component::{Component, ComponentKind};
pub use scene::model::{ParseOptions, Scene};
