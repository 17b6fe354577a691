//! Connector geometry between consecutive rows
//!
//! Converts a [`RowViewModel`] into renderer-agnostic drawing primitives.
//! Columns refer to lane positions; the row is split vertically into a top
//! half (entering lanes) and a bottom half (leaving lanes) around the node.

use serde::Serialize;

use crate::layout::{RowKind, RowViewModel};

/// Vertical anchor inside a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAnchor {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStyle {
    Plain,
    Merge,
    Head,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Primitive {
    /// Lane passing through the row in the same column
    Straight { column: usize },
    /// Lane shifting from one column to another across the row
    #[serde(rename_all = "camelCase")]
    Curve { from_column: usize, to_column: usize },
    /// Merge-source lane leaving the node towards its own column
    #[serde(rename_all = "camelCase")]
    MergeIn { from_column: usize, to_column: usize },
    /// Vertical segment in the node's column
    Stub {
        column: usize,
        from: RowAnchor,
        to: RowAnchor,
    },
    Node { column: usize, style: NodeStyle },
}

pub fn node_style(row: &RowViewModel) -> NodeStyle {
    if row.kind == RowKind::Head {
        NodeStyle::Head
    } else if row.is_merge() {
        NodeStyle::Merge
    } else {
        NodeStyle::Plain
    }
}

/// Primitives connecting `row` to its neighbours, node last
///
/// A commit with parents gets a mid-to-bottom stub when its first parent's
/// lane leaves from `node_column`. When the first parent instead joined a lane
/// tracked in another column, the stub is replaced by a
/// `Curve { from_column: node_column, to_column }` towards that lane.
///
/// An out-of-range `node_column` is treated as a fresh column appended after
/// the input lanes.
pub fn resolve_connectors(row: &RowViewModel) -> Vec<Primitive> {
    let node_column = row.node_column.min(row.input_lanes.len());
    let mut primitives = Vec::with_capacity(row.input_lanes.len() + row.parent_ids.len() + 3);

    for (column, lane) in row.input_lanes.iter().enumerate() {
        if lane.id == row.commit_id {
            if column != node_column {
                primitives.push(Primitive::Curve {
                    from_column: column,
                    to_column: node_column,
                });
            }
            continue;
        }

        match row.output_column(&lane.id) {
            Some(target) if target == column => primitives.push(Primitive::Straight { column }),
            Some(target) => primitives.push(Primitive::Curve {
                from_column: column,
                to_column: target,
            }),
            None => {}
        }
    }

    let mut outgoing_stub = false;
    let mut first_parent_curve = None;
    if let Some(first_parent) = row.parent_ids.first() {
        match row.output_column(first_parent) {
            Some(target) if target == node_column => outgoing_stub = true,
            Some(target) => first_parent_curve = Some(target),
            None => {}
        }
    }

    for (index, parent) in row.parent_ids.iter().enumerate().skip(1) {
        if row.parent_ids[..index].contains(parent) {
            continue;
        }
        match row.output_column(parent) {
            Some(target) if target == node_column => outgoing_stub = true,
            Some(target) => primitives.push(Primitive::MergeIn {
                from_column: target,
                to_column: node_column,
            }),
            None => {}
        }
    }

    let incoming = row
        .input_lanes
        .get(node_column)
        .is_some_and(|lane| lane.id == row.commit_id);
    if incoming {
        primitives.push(Primitive::Stub {
            column: node_column,
            from: RowAnchor::Top,
            to: RowAnchor::Middle,
        });
    }
    if outgoing_stub {
        primitives.push(Primitive::Stub {
            column: node_column,
            from: RowAnchor::Middle,
            to: RowAnchor::Bottom,
        });
    }
    if let Some(target) = first_parent_curve {
        primitives.push(Primitive::Curve {
            from_column: node_column,
            to_column: target,
        });
    }

    primitives.push(Primitive::Node {
        column: node_column,
        style: node_style(row),
    });

    primitives
}
