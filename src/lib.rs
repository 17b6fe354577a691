//! # Commit Graph
//!
//! Lane layout engine for commit history graphs. Given commits in
//! reverse-chronological order, it works out which column every commit
//! occupies, which lanes pass through each row, what color every lane and
//! reference gets, and which line segments join consecutive rows.
//!
//! ## Features
//!
//! - **Lane Layout**: single pass over the history, one row per commit
//! - **Stable Colors**: sequential palette allocation, cached per reference
//! - **Connector Geometry**: renderer-agnostic straight, curve, merge-in and stub primitives
//! - **Reference Decoding**: typed branches, remotes, tags and `HEAD` from decoration tokens
//! - **Input Boundary**: tolerant JSON and log record parsing, dedup by commit id
//!
//! ## Quick Start
//!
//! ```rust
//! use commit_graph::{compute_graph, Commit, LayoutConfig, Primitive};
//!
//! let commits = vec![
//!     Commit::new("c2", ["c1", "b1"]),
//!     Commit::new("b1", ["c1"]),
//!     Commit::new("c1", Vec::<String>::new()),
//! ];
//!
//! let graph = compute_graph(&commits, Some("c2"), &LayoutConfig::default());
//! assert_eq!(graph.max_lanes, 2);
//!
//! let merge = &graph.rows[0];
//! assert_eq!(merge.view.output_lanes.len(), 2);
//! assert!(merge
//!     .primitives
//!     .contains(&Primitive::MergeIn { from_column: 1, to_column: 0 }));
//! ```
//!
//! ## From raw log output
//!
//! ```rust
//! use commit_graph::{log_format, sanitize, layout};
//!
//! let text = "c1\x1fc0\x1fAda\x1f2024-05-01T10:00:00Z\x1fHEAD -> main\x1fSecond\n\
//!             c0\x1f\x1fAda\x1f2024-04-30T10:00:00Z\x1f\x1fFirst\n";
//! let commits = sanitize(log_format::parse_log_records(text)?);
//! let rows = layout(&commits, Some("c1"));
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].decorations.len(), 2);
//! # Ok::<(), commit_graph::GraphError>(())
//! ```

pub mod color;
pub mod config;
pub mod decoration;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod log_format;
pub mod model;

// Re-export the most commonly used types and functions for easy access
pub use error::{GraphError, GraphResult};

pub use model::{Color, Commit, RawCommit, RefCategory, Reference};

pub use color::{ColorAllocator, Palette, DEFAULT_PALETTE};
pub use config::{load_config_from_path, save_config_to_path, LayoutConfig};
pub use decoration::{decode_references, split_decorations, ReferenceDecoder};

pub use layout::{
    compute_graph, layout, layout_batch, layout_with_config, Decoration, GraphLayout, Lane,
    LayoutContext, LayoutRow, RowKind, RowViewModel,
};
pub use geometry::{node_style, resolve_connectors, NodeStyle, Primitive, RowAnchor};

pub use filter::{filter_commits, SearchFilter};
pub use input::{layout_json, parse_timestamp, sanitize, sanitize_with};
