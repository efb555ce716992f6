use std::sync::Arc;

use crate::{
    foundation::{
        core::Extent,
        error::{AsciimageError, AsciimageResult},
    },
    parse::{
        classify::classify,
        occurrences::{OccurrenceIndex, OccurrenceOrder},
        scanner::{ROW_SEPARATOR, ScanError, scan},
    },
    scene::component::Component,
};

/// Knobs for [`Scene::parse_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub order: OccurrenceOrder,
}

/// A parsed ASCII image: grid extent plus components in paint order.
///
/// Cloning is cheap; clones share the same immutable storage. A scene parsed from a malformed
/// grid is *invalid* (zero extent, no components); check [`Scene::is_valid`] before use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    inner: Arc<SceneData>,
}

#[derive(Debug, PartialEq, Eq, serde::Serialize)]
struct SceneData {
    extent: Extent,
    components: Vec<Component>,
}

impl serde::Serialize for Scene {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(self.inner.as_ref(), serializer)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::invalid()
    }
}

impl Scene {
    /// The invalid scene: zero extent, no components.
    pub fn invalid() -> Self {
        Self::from_parts(Extent::EMPTY, Vec::new())
    }

    fn from_parts(extent: Extent, components: Vec<Component>) -> Self {
        Self {
            inner: Arc::new(SceneData { extent, components }),
        }
    }

    /// Parses `text` with default options. Never fails; malformed input yields an invalid
    /// scene.
    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, &ParseOptions::default())
    }

    #[tracing::instrument(skip(text), fields(len = text.len()))]
    pub fn parse_with(text: &str, opts: &ParseOptions) -> Self {
        Self::parse_lenient(text.chars(), opts)
    }

    /// Parses bytes as Latin-1 text.
    pub fn parse_bytes(bytes: &[u8]) -> Self {
        Self::parse_bytes_with(bytes, &ParseOptions::default())
    }

    #[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
    pub fn parse_bytes_with(bytes: &[u8], opts: &ParseOptions) -> Self {
        Self::parse_lenient(bytes.iter().map(|&b| char::from(b)), opts)
    }

    /// Parses one string per row.
    pub fn parse_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = lines
            .into_iter()
            .map(|l| l.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(&ROW_SEPARATOR.to_string());
        Self::parse(&text)
    }

    /// Like [`Scene::parse_with`] but reports why a grid is rejected instead of returning an
    /// invalid scene.
    pub fn try_parse(text: &str, opts: &ParseOptions) -> AsciimageResult<Self> {
        let scene = Self::parse_chars(text.chars(), opts)
            .map_err(|err| AsciimageError::validation(err.to_string()))?;
        if !scene.is_valid() {
            return Err(AsciimageError::validation(format!(
                "grid is empty ({} rows, {} columns)",
                scene.rows(),
                scene.columns()
            )));
        }
        Ok(scene)
    }

    fn parse_lenient(text: impl IntoIterator<Item = char>, opts: &ParseOptions) -> Self {
        let scene = Self::parse_chars(text, opts).unwrap_or_else(|err| {
            tracing::debug!(%err, "grid rejected");
            Self::invalid()
        });
        tracing::debug!(
            rows = scene.rows(),
            columns = scene.columns(),
            components = scene.components().len(),
            "parsed"
        );
        scene
    }

    fn parse_chars(
        text: impl IntoIterator<Item = char>,
        opts: &ParseOptions,
    ) -> Result<Self, ScanError> {
        let scanned = scan(text)?;
        let occurrences = OccurrenceIndex::build(&scanned.observations, opts.order);
        let components = classify(&occurrences);
        Ok(Self::from_parts(scanned.extent, components))
    }

    pub fn is_valid(&self) -> bool {
        self.inner.extent.is_valid()
    }

    pub fn extent(&self) -> Extent {
        self.inner.extent
    }

    pub fn rows(&self) -> u32 {
        self.inner.extent.rows
    }

    pub fn columns(&self) -> u32 {
        self.inner.extent.columns
    }

    /// Components in alphabet order of their tags, which is also paint order.
    pub fn components(&self) -> &[Component] {
        &self.inner.components
    }
}
