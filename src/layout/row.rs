use serde::Serialize;

use crate::model::{Color, Reference};

/// A tracked thread of history, named after the next commit it waits for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Lane {
    /// Hash of the commit this lane connects to next
    pub id: String,
    /// Color, stable for the lane's whole lifetime
    pub color: Color,
}

impl Lane {
    pub fn new(id: impl Into<String>, color: Color) -> Self {
        Self {
            id: id.into(),
            color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    /// The commit HEAD points at
    Head,
    Node,
}

/// A reference together with the color resolved for it in this pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoration {
    pub reference: Reference,
    pub color: Color,
}

/// Layout of a single commit row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowViewModel {
    pub commit_id: String,
    pub parent_ids: Vec<String>,
    pub kind: RowKind,
    /// Lanes entering the row; equal to the previous row's `output_lanes`
    pub input_lanes: Vec<Lane>,
    /// Lanes leaving the row after this commit is processed
    pub output_lanes: Vec<Lane>,
    /// Column of the commit's node; `input_lanes.len()` when no lane led here
    pub node_column: usize,
    pub node_color: Color,
    pub decorations: Vec<Decoration>,
}

impl RowViewModel {
    /// Whether a lane from an earlier row ends in this commit's node
    pub fn has_incoming_lane(&self) -> bool {
        self.input_lanes
            .get(self.node_column)
            .is_some_and(|lane| lane.id == self.commit_id)
    }

    pub fn is_merge(&self) -> bool {
        self.parent_ids.len() > 1
    }

    /// Columns this row needs to render
    pub fn width(&self) -> usize {
        self.input_lanes
            .len()
            .max(self.output_lanes.len())
            .max(self.node_column + 1)
    }

    /// Output column of the lane waiting for `commit_id`
    pub fn output_column(&self, commit_id: &str) -> Option<usize> {
        self.output_lanes.iter().position(|lane| lane.id == commit_id)
    }
}
