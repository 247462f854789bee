//! Property-based tests for graph ordering and expansion.

use std::collections::HashMap;

use proptest::prelude::*;

use super::engine::expand;
use super::graph::requirements_of;
use super::topo::topo_sort;
use crate::config::{Bindings, Namespace};
use crate::error::Error;

// Each node may only reference nodes with a smaller index, so the graph is
// acyclic by construction. Declaration order is reversed to make sure the
// ordering never leans on it.
fn acyclic_namespace_strategy() -> impl Strategy<Value = Namespace> {
    prop::collection::vec(
        ("[a-z]{1,6}", prop::collection::vec(any::<prop::sample::Index>(), 0..4)),
        1..12,
    )
    .prop_map(|nodes| {
        let mut ns = Namespace::new();
        for (i, (literal, refs)) in nodes.iter().enumerate().rev() {
            let mut tokens: Vec<String> = Vec::new();
            if i > 0 {
                for r in refs {
                    tokens.push(format!("$p{}", r.index(i)));
                }
            }
            tokens.push(literal.clone());
            ns = ns.with_path(format!("p{i}"), tokens);
        }
        ns
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every node appears exactly once, after all of its direct references
    #[test]
    fn order_respects_dependencies(ns in acyclic_namespace_strategy()) {
        let requirements = requirements_of(&ns);
        let order = topo_sort(requirements.clone(), &Bindings::new()).unwrap();
        prop_assert_eq!(order.len(), ns.paths.len());

        let position: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();
        for (name, targets) in &requirements {
            for target in targets {
                prop_assert!(position[target.as_str()] < position[name.as_str()]);
            }
        }
    }

    // Re-running the expansion gives identical results
    #[test]
    fn expansion_is_idempotent(ns in acyclic_namespace_strategy()) {
        prop_assert_eq!(expand(&ns).unwrap(), expand(&ns).unwrap());
    }

    // Expanded paths contain no unresolved path references
    #[test]
    fn expansion_inlines_all_references(ns in acyclic_namespace_strategy()) {
        let expansion = expand(&ns).unwrap();
        for segments in expansion.values() {
            for segment in segments {
                if let super::Segment::Literal(s) = segment {
                    prop_assert!(!s.starts_with('$'));
                }
            }
        }
    }

    // Closing a loop from the first node to the last always fails
    #[test]
    fn back_edge_creates_cycle(ns in acyclic_namespace_strategy()) {
        let last = ns.paths.len() - 1;
        let mut cyclic = ns.clone();
        // p_last either already reaches p0 or gets a direct edge to it.
        cyclic.paths.get_mut(&format!("p{last}")).unwrap().push("$p0".to_string());
        cyclic.paths.get_mut("p0").unwrap().push(format!("$p{last}"));

        let failed = matches!(expand(&cyclic), Err(Error::ResolveFailed { .. }));
        prop_assert!(failed, "cycle through p0 and p{} was accepted", last);
    }

    // A reference to an unknown name always fails
    #[test]
    fn undefined_reference_fails(ns in acyclic_namespace_strategy()) {
        let mut broken = ns.clone();
        broken.paths.get_mut("p0").unwrap().push("$does_not_exist".to_string());
        let failed = matches!(expand(&broken), Err(Error::ResolveFailed { .. }));
        prop_assert!(failed, "reference to an undefined path was accepted");
    }
}
