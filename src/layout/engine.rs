//! Lane assignment
//!
//! A single left fold over the commit list, newest first. Each row starts
//! from the previous row's output lanes, replaces the lane waiting for the
//! current commit with one waiting for its first parent, and opens new lanes
//! for parents nobody is waiting for yet.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use super::row::{Decoration, Lane, RowKind, RowViewModel};
use crate::color::ColorAllocator;
use crate::config::LayoutConfig;
use crate::model::{Color, Commit};

/// Mutable state of one layout pass
///
/// Created per call and dropped with it, so independent passes never share
/// colors or lanes.
#[derive(Debug)]
pub struct LayoutContext<'a> {
    allocator: ColorAllocator,
    commits_by_id: HashMap<&'a str, &'a Commit>,
    head_commit_id: Option<&'a str>,
}

impl<'a> LayoutContext<'a> {
    pub fn new(commits: &'a [Commit], head_commit_id: Option<&'a str>, config: &LayoutConfig) -> Self {
        let mut commits_by_id = HashMap::with_capacity(commits.len());
        for commit in commits {
            commits_by_id.entry(commit.id.as_str()).or_insert(commit);
        }

        Self {
            allocator: config.allocator(),
            commits_by_id,
            head_commit_id,
        }
    }

    pub fn allocator(&self) -> &ColorAllocator {
        &self.allocator
    }

    /// Lay out one row given the lanes entering it
    pub fn process(&mut self, input_lanes: Vec<Lane>, commit: &Commit) -> RowViewModel {
        let kind = if self.head_commit_id == Some(commit.id.as_str()) {
            RowKind::Head
        } else {
            RowKind::Node
        };

        let node_column = input_lanes
            .iter()
            .position(|lane| lane.id == commit.id)
            .unwrap_or(input_lanes.len());

        let commit_color = self.reference_color(commit);
        let mut output_lanes: Vec<Lane> = Vec::with_capacity(input_lanes.len() + commit.parent_ids.len());
        let mut first_parent_placed = false;

        for lane in &input_lanes {
            if lane.id != commit.id {
                output_lanes.push(lane.clone());
                continue;
            }

            // A second lane into the same commit rejoins here and ends
            if first_parent_placed {
                continue;
            }

            // Root commit: the lane terminates
            let Some(first_parent) = commit.first_parent() else {
                continue;
            };
            first_parent_placed = true;

            // Another lane already waits for the first parent; fold into it
            if input_lanes.iter().any(|other| other.id == first_parent) {
                continue;
            }

            output_lanes.push(Lane::new(
                first_parent,
                commit_color.clone().unwrap_or_else(|| lane.color.clone()),
            ));
        }

        let skip = usize::from(first_parent_placed);
        for (index, parent) in commit.parent_ids.iter().enumerate().skip(skip) {
            if output_lanes.iter().any(|lane| lane.id == *parent) {
                continue;
            }

            let preferred = if index == 0 {
                commit_color.clone()
            } else {
                self.parent_reference_color(parent)
            };
            let color = preferred.unwrap_or_else(|| self.allocator.next_color());
            output_lanes.push(Lane::new(parent.clone(), color));
        }

        // The output lane at the node column wins, even when it is a lane that
        // shifted in from the right after the commit's own lane folded away
        let node_color = output_lanes
            .get(node_column)
            .or_else(|| input_lanes.get(node_column))
            .map(|lane| lane.color.clone())
            .unwrap_or_else(|| self.allocator.palette().first().clone());

        let decorations = commit
            .references
            .iter()
            .map(|reference| Decoration {
                color: self
                    .allocator
                    .color_for_reference(&reference.id, node_color.clone()),
                reference: reference.clone(),
            })
            .collect();

        trace!(
            "Row {}: column {}, lanes {} -> {}",
            commit.id,
            node_column,
            input_lanes.len(),
            output_lanes.len()
        );

        RowViewModel {
            commit_id: commit.id.clone(),
            parent_ids: commit.parent_ids.clone(),
            kind,
            input_lanes,
            output_lanes,
            node_column,
            node_color,
            decorations,
        }
    }

    /// First cached color among the commit's own references
    fn reference_color(&self, commit: &Commit) -> Option<Color> {
        commit
            .references
            .iter()
            .find_map(|reference| self.allocator.cached_reference_color(&reference.id))
            .cloned()
    }

    /// Reference color of a merge-source parent that is itself a decorated tip
    fn parent_reference_color(&self, parent_id: &str) -> Option<Color> {
        self.commits_by_id
            .get(parent_id)
            .and_then(|parent| self.reference_color(parent))
    }
}

/// Lay out `commits` with the default configuration
pub fn layout(commits: &[Commit], head_commit_id: Option<&str>) -> Vec<RowViewModel> {
    layout_with_config(commits, head_commit_id, &LayoutConfig::default())
}

/// Lay out `commits` (newest first), one row per distinct commit id
///
/// Later repeats of an id and rows with a blank id are skipped. An invalid
/// palette in `config` is replaced by the default one with a warning.
pub fn layout_with_config(
    commits: &[Commit],
    head_commit_id: Option<&str>,
    config: &LayoutConfig,
) -> Vec<RowViewModel> {
    let mut context = LayoutContext::new(commits, head_commit_id, config);
    let mut seen: HashSet<&str> = HashSet::with_capacity(commits.len());

    let rows = commits
        .iter()
        .filter(|commit| {
            if commit.id.trim().is_empty() {
                debug!("Dropping commit row without an id");
                return false;
            }
            if !seen.insert(commit.id.as_str()) {
                debug!("Dropping repeated occurrence of commit {}", commit.id);
                return false;
            }
            true
        })
        .fold(Vec::with_capacity(commits.len()), |mut rows: Vec<RowViewModel>, commit| {
            let input_lanes = rows
                .last()
                .map(|row| row.output_lanes.clone())
                .unwrap_or_default();
            rows.push(context.process(input_lanes, commit));
            rows
        });

    debug!(
        "Laid out {} rows using {} color allocations, {} lanes left open",
        rows.len(),
        context.allocator().allocations(),
        rows.last().map_or(0, |row| row.output_lanes.len())
    );

    rows
}
