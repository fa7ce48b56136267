//! Parent-link validation and processing order
//!
//! Bones are stored as a flat list with parent indices. World transforms can
//! only be composed once a bone's parent is resolved, so every pass walks the
//! list in a parent-before-child order. Buffers stay indexed by bone id; only
//! the walk order changes.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{Result, SkinError};
use crate::skeleton::Bone;

/// Checks that every parent index refers to another bone in the list.
pub fn validate_parents(bones: &[Bone]) -> Result<()> {
    let bone_count = bones.len();
    for (bone, b) in bones.iter().enumerate() {
        match b.parent {
            Some(parent) if parent >= bone_count => {
                return Err(SkinError::ParentOutOfRange {
                    bone,
                    parent,
                    bone_count,
                });
            }
            Some(parent) if parent == bone => return Err(SkinError::SelfParent { bone }),
            _ => {}
        }
    }
    Ok(())
}

/// True when every parent index is smaller than its child's index.
pub fn is_parent_ordered(bones: &[Bone]) -> bool {
    bones
        .iter()
        .enumerate()
        .all(|(i, b)| b.parent.is_none_or(|p| p < i))
}

/// Requires index order to already be a valid processing order.
pub fn check_parent_order(bones: &[Bone]) -> Result<()> {
    validate_parents(bones)?;
    for (bone, b) in bones.iter().enumerate() {
        match b.parent {
            Some(parent) if parent > bone => {
                return Err(SkinError::ParentAfterChild { bone, parent });
            }
            _ => {}
        }
    }
    Ok(())
}

/// Parent-before-child processing order.
///
/// Among bones that are ready at the same time the lower index goes first,
/// so an already ordered hierarchy yields `0..n` unchanged.
pub fn topological_order(bones: &[Bone]) -> Result<Vec<usize>> {
    validate_parents(bones)?;

    let n = bones.len();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ready = BinaryHeap::new();
    for (i, b) in bones.iter().enumerate() {
        match b.parent {
            Some(p) => children[p].push(i),
            None => ready.push(Reverse(i)),
        }
    }

    let mut order = Vec::with_capacity(n);
    while let Some(Reverse(i)) = ready.pop() {
        order.push(i);
        for &child in &children[i] {
            ready.push(Reverse(child));
        }
    }

    if order.len() < n {
        let mut visited = vec![false; n];
        for &i in &order {
            visited[i] = true;
        }
        let start = visited.iter().position(|v| !v).unwrap_or(0);
        return Err(SkinError::HierarchyCycle {
            bone: bone_on_cycle(bones, start),
        });
    }

    Ok(order)
}

/// Follow parent links from `start` (a bone that never became ready) until
/// a bone repeats. The repeated bone lies on the loop itself.
fn bone_on_cycle(bones: &[Bone], start: usize) -> usize {
    let mut seen = vec![false; bones.len()];
    let mut bone = start;
    while !seen[bone] {
        seen[bone] = true;
        match bones[bone].parent {
            Some(parent) => bone = parent,
            None => return start,
        }
    }
    bone
}

/// Inverse permutation: `rank[bone]` is the bone's position in `order`.
pub fn ranks(order: &[usize]) -> Vec<usize> {
    let mut rank = vec![0; order.len()];
    for (pos, &bone) in order.iter().enumerate() {
        rank[bone] = pos;
    }
    rank
}

/// Checks a (possibly different) bone list against a fixed processing order.
///
/// `rank` must come from [`ranks`] for a list of the same length. Does not
/// allocate.
pub fn check_against_ranks(bones: &[Bone], rank: &[usize]) -> Result<()> {
    let bone_count = bones.len();
    for (bone, b) in bones.iter().enumerate() {
        let Some(parent) = b.parent else { continue };
        if parent >= bone_count {
            return Err(SkinError::ParentOutOfRange {
                bone,
                parent,
                bone_count,
            });
        }
        if parent == bone {
            return Err(SkinError::SelfParent { bone });
        }
        if rank[parent] > rank[bone] {
            return Err(SkinError::ParentAfterChild { bone, parent });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Transform;

    fn chain(parents: &[Option<usize>]) -> Vec<Bone> {
        parents
            .iter()
            .map(|&parent| Bone {
                local: Transform::IDENTITY,
                parent,
            })
            .collect()
    }

    #[test]
    fn test_ordered_hierarchy_keeps_index_order() {
        let bones = chain(&[None, Some(0), Some(1), Some(0), None, Some(4)]);
        assert!(is_parent_ordered(&bones));
        assert!(check_parent_order(&bones).is_ok());
        assert_eq!(topological_order(&bones).unwrap(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_unordered_hierarchy_is_sorted() {
        // 0 -> parent 2, 1 -> parent 0, 2 root
        let bones = chain(&[Some(2), Some(0), None]);
        assert!(!is_parent_ordered(&bones));
        assert!(matches!(
            check_parent_order(&bones),
            Err(SkinError::ParentAfterChild { bone: 0, parent: 2 })
        ));
        assert_eq!(topological_order(&bones).unwrap(), vec![2, 0, 1]);
    }

    #[test]
    fn test_out_of_range_parent() {
        let bones = chain(&[None, Some(7)]);
        assert!(matches!(
            topological_order(&bones),
            Err(SkinError::ParentOutOfRange {
                bone: 1,
                parent: 7,
                bone_count: 2
            })
        ));
    }

    #[test]
    fn test_self_parent() {
        let bones = chain(&[None, Some(1)]);
        assert!(matches!(
            validate_parents(&bones),
            Err(SkinError::SelfParent { bone: 1 })
        ));
    }

    #[test]
    fn test_cycle_is_rejected() {
        let bones = chain(&[None, Some(2), Some(1)]);
        assert!(matches!(
            topological_order(&bones),
            Err(SkinError::HierarchyCycle { bone: 1 })
        ));
    }

    #[test]
    fn test_cycle_error_names_a_bone_on_the_loop() {
        // Bone 0 hangs off the 1 <-> 2 loop but is not part of it
        let bones = chain(&[Some(1), Some(2), Some(1)]);
        match topological_order(&bones) {
            Err(SkinError::HierarchyCycle { bone }) => {
                assert_eq!(bone, 1);
            }
            other => panic!("expected a cycle error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_hierarchy() {
        assert!(topological_order(&[]).unwrap().is_empty());
        assert!(check_parent_order(&[]).is_ok());
    }

    #[test]
    fn test_check_against_ranks() {
        let bones = chain(&[Some(2), Some(0), None]);
        let order = topological_order(&bones).unwrap();
        let rank = ranks(&order);
        assert_eq!(rank, vec![1, 2, 0]);
        assert!(check_against_ranks(&bones, &rank).is_ok());

        // Re-parenting bone 2 under bone 1 breaks the fixed order
        let reparented = chain(&[Some(2), Some(0), Some(1)]);
        assert!(matches!(
            check_against_ranks(&reparented, &rank),
            Err(SkinError::ParentAfterChild { bone: 2, parent: 1 })
        ));
    }
}
