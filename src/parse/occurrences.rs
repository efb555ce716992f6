use crate::{
    foundation::core::Cell,
    parse::{
        alphabet::{GLYPH_COUNT, Glyph},
        scanner::Observation,
    },
};

/// Order in which the cells of one glyph are reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccurrenceOrder {
    /// Row-major scan order.
    #[default]
    FirstObserved,
    /// Reverse scan order, matching hash-multimap based readers that return the most recent
    /// insertion first. Changes which endpoint of a line comes first.
    LastObserved,
}

/// Cells per glyph, indexed by alphabet position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccurrenceIndex {
    cells: [Vec<Cell>; GLYPH_COUNT],
}

impl OccurrenceIndex {
    pub fn build(observations: &[Observation], order: OccurrenceOrder) -> Self {
        let mut cells: [Vec<Cell>; GLYPH_COUNT] = std::array::from_fn(|_| Vec::new());
        for obs in observations {
            if let Some(list) = cells.get_mut(obs.glyph.index()) {
                list.push(obs.cell);
            }
        }
        if order == OccurrenceOrder::LastObserved {
            cells.iter_mut().for_each(|c| c.reverse());
        }
        Self { cells }
    }

    /// Cells of `glyph`; empty when it never appeared.
    pub fn get(&self, glyph: Glyph) -> &[Cell] {
        self.cells
            .get(glyph.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Occurrence count, with the end-of-alphabet sentinel (`None`) counting as zero.
    pub fn count(&self, glyph: Option<Glyph>) -> usize {
        glyph.map_or(0, |g| self.get(g).len())
    }
}
