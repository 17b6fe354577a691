//! Sanitizing commit rows handed over by the surrounding application

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::LayoutConfig;
use crate::decoration::ReferenceDecoder;
use crate::error::{GraphError, GraphResult};
use crate::layout::{compute_graph, GraphLayout};
use crate::model::{Commit, RawCommit};

/// Validate raw rows with the default decoder
pub fn sanitize(raw: Vec<RawCommit>) -> Vec<Commit> {
    sanitize_with(raw, &ReferenceDecoder::new())
}

/// Validate raw rows: drop rows without an id, drop repeated ids (first
/// occurrence wins), decode decorations and parse timestamps
pub fn sanitize_with(raw: Vec<RawCommit>, decoder: &ReferenceDecoder) -> Vec<Commit> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut commits = Vec::with_capacity(raw.len());

    for (index, row) in raw.into_iter().enumerate() {
        let Some(id) = row.id.map(|id| id.trim().to_string()).filter(|id| !id.is_empty()) else {
            debug!("Dropping commit row {} without an id", index);
            continue;
        };

        if !seen.insert(id.clone()) {
            debug!("Dropping repeated commit {} at row {}", id, index);
            continue;
        }

        let timestamp = row.timestamp.as_deref().and_then(|value| {
            let parsed = parse_timestamp(value);
            if parsed.is_none() {
                debug!("Ignoring unparsable timestamp '{}' on commit {}", value, id);
            }
            parsed
        });

        commits.push(Commit {
            id,
            parent_ids: row
                .parent_ids
                .into_iter()
                .map(|parent| parent.trim().to_string())
                .filter(|parent| !parent.is_empty())
                .collect(),
            subject: row.subject,
            author: row.author,
            timestamp,
            references: decoder.decode(&row.references),
        });
    }

    commits
}

/// Parse an RFC 3339 / ISO 8601 date, or integer unix seconds
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    value
        .parse::<i64>()
        .ok()
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
}

/// Lay out a JSON array of raw commit rows
///
/// A JSON `null` in place of the list is rejected as an invalid argument.
pub fn layout_json(input: &str, head_commit_id: Option<&str>, config: &LayoutConfig) -> GraphResult<GraphLayout> {
    let raw: Option<Vec<RawCommit>> = serde_json::from_str(input)?;
    let raw = raw.ok_or_else(|| GraphError::invalid_argument("commit list is null"))?;
    let commits = sanitize_with(raw, &config.decoder());
    Ok(compute_graph(&commits, head_commit_id, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Reference;
    use pretty_assertions::assert_eq;

    fn raw(id: Option<&str>, parents: &[&str]) -> RawCommit {
        RawCommit {
            id: id.map(str::to_string),
            parent_ids: parents.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_drops_rows_without_id() {
        let commits = sanitize(vec![raw(None, &["a"]), raw(Some("  "), &[]), raw(Some("b"), &[])]);
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].id, "b");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let commits = sanitize(vec![raw(Some("a"), &["x"]), raw(Some("a"), &["y"])]);
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].parent_ids, vec!["x".to_string()]);
    }

    #[test]
    fn test_decodes_references() {
        let mut row = raw(Some("a"), &[]);
        row.references = vec!["HEAD -> main".to_string(), "tag: v1".to_string()];
        let commits = sanitize(vec![row]);
        assert_eq!(
            commits[0].references,
            vec![Reference::head(), Reference::branch("main"), Reference::tag("v1")]
        );
    }

    #[test]
    fn test_timestamp_parsing_is_tolerant() {
        assert_eq!(
            parse_timestamp("2024-05-01T12:30:00+02:00").map(|t| t.timestamp()),
            Some(1714559400)
        );
        assert_eq!(parse_timestamp("1714559400").map(|t| t.timestamp()), Some(1714559400));
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);

        let mut row = raw(Some("a"), &[]);
        row.timestamp = Some("not a date".to_string());
        let commits = sanitize(vec![row]);
        assert_eq!(commits[0].timestamp, None);
    }

    #[test]
    fn test_layout_json_null_is_invalid_argument() {
        let result = layout_json("null", None, &LayoutConfig::default());
        assert!(matches!(result, Err(GraphError::InvalidArgument { .. })));
    }

    #[test]
    fn test_layout_json_malformed() {
        let result = layout_json("[{\"id\": ", None, &LayoutConfig::default());
        assert!(matches!(result, Err(GraphError::Json(_))));
    }

    #[test]
    fn test_layout_json() {
        let graph = layout_json(
            r#"[
                {"id": "c1", "parentIds": ["c0"], "references": ["HEAD -> main"]},
                {"parentIds": ["orphan"]},
                {"id": "c0", "parentIds": []}
            ]"#,
            Some("c1"),
            &LayoutConfig::default(),
        )
        .unwrap();
        assert_eq!(graph.len(), 2);
        assert!(graph.dangling_lanes().is_empty());
        assert_eq!(graph.rows[0].view.decorations.len(), 2);
    }
}
