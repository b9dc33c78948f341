//! Structural checks on the dependency table

use std::collections::{HashMap, HashSet};

use crate::catalog::dependencies;
use crate::error::{PermissionError, Result};
use crate::permission::Permission;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Active,
    Done,
}

/// Validate the static table: no self-loops, no cycles
pub fn validate() -> Result<()> {
    validate_with(Permission::ALL, dependencies)
}

/// Validate an arbitrary graph over catalog permissions
pub fn validate_with<'a, F>(nodes: &[Permission], edges: F) -> Result<()>
where
    F: Fn(Permission) -> &'a [Permission],
{
    if let Some(&p) = nodes.iter().find(|&&p| edges(p).contains(&p)) {
        return Err(PermissionError::SelfDependency(p));
    }

    let mut marks = HashMap::with_capacity(nodes.len());
    let mut path = Vec::new();
    for &p in nodes {
        visit(p, &edges, &mut marks, &mut path)?;
    }
    Ok(())
}

fn visit<'a, F>(
    p: Permission,
    edges: &F,
    marks: &mut HashMap<Permission, Mark>,
    path: &mut Vec<Permission>,
) -> Result<()>
where
    F: Fn(Permission) -> &'a [Permission],
{
    match marks.get(&p) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::Active) => {
            let start = path.iter().position(|&q| q == p).unwrap_or(0);
            let mut cycle = path[start..].to_vec();
            cycle.push(p);
            return Err(PermissionError::Cycle(cycle));
        }
        None => {}
    }

    marks.insert(p, Mark::Active);
    path.push(p);
    for &dep in edges(p) {
        visit(dep, edges, marks, path)?;
    }
    path.pop();
    marks.insert(p, Mark::Done);
    Ok(())
}

/// Length of the longest dependency chain below `p` (0 for a leaf)
pub fn depth(p: Permission) -> usize {
    depth_with(p, dependencies)
}

/// Longest chain below `p` in an arbitrary graph. Each node is measured
/// once; an edge back onto the current path counts as a leaf, so a cyclic
/// graph still terminates in linear time.
pub fn depth_with<'a, F>(p: Permission, edges: F) -> usize
where
    F: Fn(Permission) -> &'a [Permission],
{
    let mut memo = HashMap::new();
    let mut on_path = HashSet::new();
    longest(p, &edges, &mut memo, &mut on_path)
}

fn longest<'a, F>(
    p: Permission,
    edges: &F,
    memo: &mut HashMap<Permission, usize>,
    on_path: &mut HashSet<Permission>,
) -> usize
where
    F: Fn(Permission) -> &'a [Permission],
{
    if let Some(&d) = memo.get(&p) {
        return d;
    }
    if !on_path.insert(p) {
        return 0;
    }
    let d = edges(p)
        .iter()
        .map(|&dep| 1 + longest(dep, edges, memo, on_path))
        .max()
        .unwrap_or(0);
    on_path.remove(&p);
    memo.insert(p, d);
    d
}
