use crate::bom_analysis::domain::{BomEdge, BomRepository, Item, ItemId, MaterialRequirement};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// RequirementCalculator service for material requirements of a production run
pub struct RequirementCalculator;

/// Leaf quantities for one unit of an assembly, in first-seen order
#[derive(Default)]
struct LeafTotals<'a> {
    entries: Vec<(&'a Item, f64)>,
    positions: HashMap<ItemId, usize>,
}

impl<'a> LeafTotals<'a> {
    fn add(&mut self, item: &'a Item, quantity: f64) {
        match self.positions.get(&item.id()) {
            Some(&index) => self.entries[index].1 += quantity,
            None => {
                self.positions.insert(item.id(), self.entries.len());
                self.entries.push((item, quantity));
            }
        }
    }

    fn merge(&mut self, other: &LeafTotals<'a>, factor: f64) {
        for &(item, quantity) in &other.entries {
            self.add(item, quantity * factor);
        }
    }
}

struct Rollup<'a> {
    product: ItemId,
    edges: Vec<&'a BomEdge>,
    next: usize,
    /// Quantity of this assembly per unit of its parent
    quantity: f64,
    totals: LeafTotals<'a>,
}

impl RequirementCalculator {
    /// Direct (single-level) requirements for `production_quantity` units.
    ///
    /// One entry per direct BOM edge, in edge order; a component listed under
    /// two operations yields two entries. `production_quantity` is used as
    /// given.
    pub fn requirements(
        repository: &BomRepository,
        product_id: ItemId,
        production_quantity: f64,
    ) -> Vec<MaterialRequirement> {
        repository
            .edges_for_product(product_id)
            .into_iter()
            .map(|edge| {
                MaterialRequirement::new(
                    edge.component().clone(),
                    edge.quantity() * production_quantity,
                    edge.operation().map(str::to_string),
                )
            })
            .collect()
    }

    /// Gross requirements of leaf items across the whole assembly tree.
    ///
    /// Quantities multiply along each path and are summed per component when
    /// the same leaf is reached through several paths. Components that have a
    /// BOM of their own are intermediate assemblies and are not listed. Result
    /// order is first-seen order of the pre-order walk.
    ///
    /// Each assembly's per-unit leaf totals are computed once and scaled at
    /// every use, so shared sub-assemblies cost nothing extra. An edge back to
    /// an assembly still being rolled up contributes nothing.
    pub fn multi_level_requirements(
        repository: &BomRepository,
        product_id: ItemId,
        production_quantity: f64,
    ) -> Vec<MaterialRequirement> {
        let mut memo: HashMap<ItemId, LeafTotals<'_>> = HashMap::new();
        let mut on_path: HashSet<ItemId> = HashSet::from([product_id]);
        let mut stack = vec![Rollup {
            product: product_id,
            edges: repository.edges_for_product(product_id),
            next: 0,
            quantity: 1.0,
            totals: LeafTotals::default(),
        }];

        loop {
            let Some(frame) = stack.last_mut() else {
                break;
            };

            let Some(&edge) = frame.edges.get(frame.next) else {
                let Some(done) = stack.pop() else {
                    break;
                };
                on_path.remove(&done.product);

                let Some(parent) = stack.last_mut() else {
                    return done
                        .totals
                        .entries
                        .into_iter()
                        .map(|(item, quantity)| {
                            MaterialRequirement::new(
                                item.clone(),
                                quantity * production_quantity,
                                None,
                            )
                        })
                        .collect();
                };
                parent.totals.merge(&done.totals, done.quantity);
                memo.insert(done.product, done.totals);
                continue;
            };
            frame.next += 1;

            let component = edge.component();
            let child = component.id();
            if !repository.has_bom(child) {
                frame.totals.add(component, edge.quantity());
                continue;
            }
            if let Some(known) = memo.get(&child) {
                frame.totals.merge(known, edge.quantity());
                continue;
            }
            if !on_path.insert(child) {
                debug!(
                    product = %edge.product_id(),
                    component = %child,
                    "back-edge while rolling up requirements, skipping"
                );
                continue;
            }

            stack.push(Rollup {
                product: child,
                edges: repository.edges_for_product(child),
                next: 0,
                quantity: edge.quantity(),
                totals: LeafTotals::default(),
            });
        }

        Vec::new()
    }
}
