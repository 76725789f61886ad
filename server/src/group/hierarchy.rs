//! Descendant expansion over the parent-group edge.
//!
//! Parent links are not guaranteed to be acyclic, so the walk keeps a visited
//! set and only ever queues groups it has not seen before. Each level of the
//! tree costs one store query.

use std::collections::HashSet;

use super::store::MembershipStore;

pub const DEFAULT_MAX_DESCENDANT_DEPTH: usize = 256;

/// Bounds applied to a single descendant walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalLimits {
    /// Number of levels below the starting groups that are followed.
    pub max_depth: usize,
}

impl Default for TraversalLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DESCENDANT_DEPTH,
        }
    }
}

/// Returns `roots` followed by every group reachable below them, each id once,
/// in breadth-first order.
pub async fn expand_descendants<S>(
    store: &S,
    roots: Vec<i64>,
    limits: &TraversalLimits,
) -> Result<Vec<i64>, sqlx::Error>
where
    S: MembershipStore + ?Sized,
{
    let mut visited: HashSet<i64> = HashSet::with_capacity(roots.len());
    let mut collected = Vec::with_capacity(roots.len());
    for id in roots {
        if visited.insert(id) {
            collected.push(id);
        }
    }

    let mut frontier = collected.clone();
    let mut depth = 0;

    while !frontier.is_empty() {
        if depth == limits.max_depth {
            tracing::warn!(
                max_depth = limits.max_depth,
                pending = frontier.len(),
                "descendant expansion stopped at depth limit"
            );
            break;
        }

        let children = store.child_group_ids(&frontier).await?;
        let mut next = Vec::with_capacity(children.len());
        for child in children {
            if visited.insert(child) {
                next.push(child);
            } else {
                tracing::debug!(group_id = child, "group already visited, skipping");
            }
        }

        collected.extend_from_slice(&next);
        frontier = next;
        depth += 1;
    }

    Ok(collected)
}
