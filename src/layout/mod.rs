//! Lane layout for commit history
//!
//! [`layout`] produces one [`RowViewModel`] per commit; [`compute_graph`]
//! additionally resolves each row's connector [`Primitive`]s so a renderer
//! can draw without re-deriving anything.

pub mod engine;
pub mod row;

pub use engine::{layout, layout_with_config, LayoutContext};
pub use row::{Decoration, Lane, RowKind, RowViewModel};

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::geometry::{resolve_connectors, Primitive};
use crate::model::Commit;

/// A row together with its drawing primitives
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutRow {
    #[serde(flatten)]
    pub view: RowViewModel,
    pub primitives: Vec<Primitive>,
}

/// Complete output of one layout pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphLayout {
    pub rows: Vec<LayoutRow>,
    /// Widest row, in columns
    pub max_lanes: usize,
}

impl GraphLayout {
    pub fn from_rows(rows: Vec<RowViewModel>) -> Self {
        let max_lanes = rows.iter().map(RowViewModel::width).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|view| LayoutRow {
                primitives: resolve_connectors(&view),
                view,
            })
            .collect();

        Self { rows, max_lanes }
    }

    /// Lanes still waiting for a commit after the last row
    ///
    /// Non-empty when parents were never reached, e.g. in a truncated or
    /// filtered history.
    pub fn dangling_lanes(&self) -> &[Lane] {
        self.rows
            .last()
            .map(|row| row.view.output_lanes.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, commit_id: &str) -> Option<&LayoutRow> {
        self.rows.iter().find(|row| row.view.commit_id == commit_id)
    }
}

/// Lay out `commits` and resolve connector geometry for every row
pub fn compute_graph(commits: &[Commit], head_commit_id: Option<&str>, config: &LayoutConfig) -> GraphLayout {
    let graph = GraphLayout::from_rows(layout_with_config(commits, head_commit_id, config));

    if !graph.dangling_lanes().is_empty() {
        tracing::debug!(
            "{} lanes never reached their commit: {:?}",
            graph.dangling_lanes().len(),
            graph
                .dangling_lanes()
                .iter()
                .map(|lane| lane.id.as_str())
                .collect::<Vec<_>>()
        );
    }

    graph
}

/// Lay out several independent histories, in parallel with the `parallel` feature
///
/// Each history gets its own pass, so results match calling
/// [`compute_graph`] on each one in turn.
pub fn layout_batch(histories: &[Vec<Commit>], config: &LayoutConfig) -> Vec<GraphLayout> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        histories
            .par_iter()
            .map(|commits| compute_graph(commits, None, config))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        histories
            .iter()
            .map(|commits| compute_graph(commits, None, config))
            .collect()
    }
}
