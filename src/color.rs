//! Lane and reference color allocation for one layout pass

use std::collections::HashMap;

use crate::error::{GraphError, GraphResult};
use crate::model::Color;

/// Default lane colors, cycled in order
pub const DEFAULT_PALETTE: [&str; 5] = ["#FFB000", "#DC267F", "#994F00", "#40B0A6", "#B66DFF"];

/// A fixed, non-empty, ordered list of colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> GraphResult<Self> {
        if colors.is_empty() {
            return Err(GraphError::EmptyPalette);
        }
        if let Some(blank) = colors.iter().find(|c| c.as_str().trim().is_empty()) {
            return Err(GraphError::InvalidColor {
                value: blank.to_string(),
            });
        }
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Never empty by construction
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Color at `index`, wrapping around the palette
    pub fn get(&self, index: usize) -> &Color {
        &self.colors[index % self.colors.len()]
    }

    pub fn first(&self) -> &Color {
        &self.colors[0]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().copied().map(Color::from).collect(),
        }
    }
}

/// Sequential color allocator plus the reference → color cache of one pass
///
/// Allocation never reuses the slot of a terminated lane: the `j`-th call to
/// [`ColorAllocator::next_color`] always returns `palette[j mod K]`, so the
/// same commit order always yields the same colors.
#[derive(Debug, Clone)]
pub struct ColorAllocator {
    palette: Palette,
    allocated: usize,
    reference_colors: HashMap<String, Color>,
}

impl ColorAllocator {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            allocated: 0,
            reference_colors: HashMap::new(),
        }
    }

    /// Allocator whose cache starts out with pinned reference colors
    pub fn with_reference_colors<I>(palette: Palette, seeds: I) -> Self
    where
        I: IntoIterator<Item = (String, Color)>,
    {
        let mut allocator = Self::new(palette);
        allocator.reference_colors.extend(seeds);
        allocator
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of colors handed out so far in this pass
    pub fn allocations(&self) -> usize {
        self.allocated
    }

    pub fn next_color(&mut self) -> Color {
        let color = self.palette.get(self.allocated).clone();
        self.allocated += 1;
        color
    }

    /// Cached color for `reference_id`, caching `fallback` on first sight
    pub fn color_for_reference(&mut self, reference_id: &str, fallback: Color) -> Color {
        self.reference_colors
            .entry(reference_id.to_string())
            .or_insert(fallback)
            .clone()
    }

    /// Cached color for `reference_id` without caching anything
    pub fn cached_reference_color(&self, reference_id: &str) -> Option<&Color> {
        self.reference_colors.get(reference_id)
    }
}
