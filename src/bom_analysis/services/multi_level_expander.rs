use crate::bom_analysis::domain::{BomEdge, BomRepository, ExplodedLine, ItemId};
use std::collections::HashSet;
use tracing::debug;

/// MultiLevelExpander service for flattening an assembly tree.
///
/// The walk is depth-first and pre-order: each edge of the current product is
/// emitted before descending into that edge's component. A sub-assembly reused
/// in several branches is expanded in each of them.
///
/// Assemblies whose subtree reaches a cycle are expanded once per walk. Later
/// edges into them, back-edges to an ancestor included, are emitted but not
/// followed. Cyclic data therefore costs one pass over the reachable edges
/// instead of one pass per simple path.
///
/// The walk keeps its own stack on the heap; arbitrarily deep assemblies do not
/// grow the call stack.
pub struct MultiLevelExpander;

struct Frame<'a> {
    edges: Vec<&'a BomEdge>,
    next: usize,
    multiplier: f64,
}

struct Visit<'a> {
    product: ItemId,
    edges: Vec<&'a BomEdge>,
    next: usize,
}

impl MultiLevelExpander {
    /// Returns every edge reachable from `product_id`, in traversal order
    pub fn expand(repository: &BomRepository, product_id: ItemId) -> Vec<&BomEdge> {
        Self::walk(repository, product_id, 1.0)
            .into_iter()
            .map(|line| line.edge)
            .collect()
    }

    /// Indented explosion of `product_id` for a run of `quantity` units
    pub fn explode(
        repository: &BomRepository,
        product_id: ItemId,
        quantity: f64,
    ) -> Vec<ExplodedLine<'_>> {
        Self::walk(repository, product_id, quantity)
    }

    fn walk(repository: &BomRepository, root: ItemId, quantity: f64) -> Vec<ExplodedLine<'_>> {
        let cyclic = Self::items_reaching_cycle(repository, root);
        let mut lines = Vec::new();
        let mut expanded: HashSet<ItemId> = HashSet::from([root]);
        let mut stack = vec![Frame {
            edges: repository.edges_for_product(root),
            next: 0,
            multiplier: quantity,
        }];

        loop {
            let level = stack.len();
            let Some(frame) = stack.last_mut() else {
                break;
            };

            let Some(&edge) = frame.edges.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            let required_quantity = frame.multiplier * edge.quantity();
            lines.push(ExplodedLine {
                level,
                edge,
                required_quantity,
            });

            let child = edge.component_id();
            if !repository.has_bom(child) {
                continue;
            }
            if cyclic.contains(&child) && !expanded.insert(child) {
                debug!(
                    product = %edge.product_id(),
                    component = %child,
                    "cyclic sub-assembly already expanded, not descending"
                );
                continue;
            }

            stack.push(Frame {
                edges: repository.edges_for_product(child),
                next: 0,
                multiplier: required_quantity,
            });
        }

        debug!(root = %root, lines = lines.len(), "expanded multi-level BOM");
        lines
    }

    /// Assemblies reachable from `root` that lie on a cycle or lead into one.
    ///
    /// One depth-first pass: a back-edge marks its source, and the mark
    /// propagates to every product with an edge into a marked one.
    fn items_reaching_cycle(repository: &BomRepository, root: ItemId) -> HashSet<ItemId> {
        let mut cyclic = HashSet::new();
        let mut on_path: HashSet<ItemId> = HashSet::from([root]);
        let mut finished: HashSet<ItemId> = HashSet::new();
        let mut stack = vec![Visit {
            product: root,
            edges: repository.edges_for_product(root),
            next: 0,
        }];

        while let Some(visit) = stack.last_mut() {
            let product = visit.product;
            let Some(&edge) = visit.edges.get(visit.next) else {
                stack.pop();
                on_path.remove(&product);
                finished.insert(product);
                if cyclic.contains(&product) {
                    if let Some(parent) = stack.last() {
                        cyclic.insert(parent.product);
                    }
                }
                continue;
            };
            visit.next += 1;

            let child = edge.component_id();
            if on_path.contains(&child) || cyclic.contains(&child) {
                cyclic.insert(product);
                continue;
            }
            if finished.contains(&child) || !repository.has_bom(child) {
                continue;
            }

            on_path.insert(child);
            stack.push(Visit {
                product: child,
                edges: repository.edges_for_product(child),
                next: 0,
            });
        }

        cyclic
    }
}
