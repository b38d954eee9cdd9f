//! Group display ordering
//!
//! A category's groups render in order of first appearance in its
//! `auditRefs` list. Refs without a group render last, under no heading.
//! Ordering is display-only and never feeds back into scores.

use crate::config::Category;

/// The group ids of a category in render order: first appearance wins,
/// later refs in an already-seen group do not move it. Ungrouped refs are
/// not represented here; reporters render them after every group.
pub fn group_render_order(category: &Category) -> Vec<String> {
    let mut order = Vec::new();
    for audit_ref in &category.audit_refs {
        if let Some(group) = &audit_ref.group {
            if !order.contains(group) {
                order.push(group.clone());
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuditRef;

    fn category(refs: &[(&str, Option<&str>)]) -> Category {
        Category {
            id: "test".into(),
            title: "Test".into(),
            description: None,
            manual_description: None,
            audit_refs: refs
                .iter()
                .map(|(id, group)| AuditRef {
                    audit_id: id.to_string(),
                    weight: 1.0,
                    group: group.map(|g| g.to_string()),
                })
                .collect(),
        }
    }

    #[test]
    fn test_first_appearance_order() {
        let cat = category(&[
            ("a", Some("g2")),
            ("b", Some("g1")),
            ("c", Some("g2")),
            ("d", Some("g3")),
        ]);
        assert_eq!(group_render_order(&cat), vec!["g2", "g1", "g3"]);
    }

    #[test]
    fn test_ungrouped_refs_do_not_appear() {
        let cat = category(&[("a", None), ("b", Some("g1")), ("c", None)]);
        assert_eq!(group_render_order(&cat), vec!["g1"]);
    }

    #[test]
    fn test_no_groups_gives_empty_order() {
        let cat = category(&[("a", None), ("b", None)]);
        assert!(group_render_order(&cat).is_empty());
    }

    #[test]
    fn test_repeated_group_does_not_reorder() {
        let cat = category(&[("a", Some("g1")), ("b", Some("g2")), ("c", Some("g1"))]);
        assert_eq!(group_render_order(&cat), vec!["g1", "g2"]);
    }
}
