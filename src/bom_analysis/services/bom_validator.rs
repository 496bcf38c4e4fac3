use crate::bom_analysis::domain::{BomEdge, BomIssue, BomRepository, ItemId, ValidationReport};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Tunables for [`BomValidator`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Accept an item without BOM entries when some other edge consumes it.
    ///
    /// Purchased parts never have a BOM of their own; with this off they are
    /// reported exactly like a product whose BOM is missing.
    pub allow_leaf_items: bool,
}

/// BomValidator service reporting structural problems without touching data.
///
/// Three checks run in order and all of them always run:
/// 1. the product has at least one direct BOM edge,
/// 2. no product reachable from the root lists one of its own ancestors,
/// 3. no component repeats within one operation of the product's direct BOM.
#[derive(Debug, Clone, Default)]
pub struct BomValidator {
    options: ValidationOptions,
}

struct PathFrame<'a> {
    product: ItemId,
    edges: Vec<&'a BomEdge>,
    next: usize,
}

impl BomValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ValidationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ValidationOptions {
        self.options
    }

    /// Validates the BOM graph rooted at `product_id`
    pub fn validate(&self, repository: &BomRepository, product_id: ItemId) -> ValidationReport {
        let mut issues = Vec::new();

        let direct = repository.edges_for_product(product_id);
        if direct.is_empty() && !self.is_accepted_leaf(repository, product_id) {
            issues.push(BomIssue::NoBomEntries {
                product: product_id,
            });
        }

        issues.extend(Self::find_cycles(repository, product_id));
        issues.extend(Self::find_duplicate_components(product_id, &direct));

        debug!(product = %product_id, issues = issues.len(), "validated BOM");
        ValidationReport::new(issues)
    }

    /// Validates every product of the repository, in first-seen order
    pub fn validate_all(&self, repository: &BomRepository) -> Vec<(ItemId, ValidationReport)> {
        repository
            .unique_products()
            .into_iter()
            .map(|product| (product.id(), self.validate(repository, product.id())))
            .collect()
    }

    fn is_accepted_leaf(&self, repository: &BomRepository, product_id: ItemId) -> bool {
        self.options.allow_leaf_items && repository.is_component(product_id)
    }

    /// Depth-first search that only treats an edge back to an ancestor on the
    /// current root-to-node path as a cycle.
    ///
    /// Finished sub-assemblies are not walked again: any cycle through them was
    /// already reported while they were on the path.
    fn find_cycles(repository: &BomRepository, root: ItemId) -> Vec<BomIssue> {
        let mut issues = Vec::new();
        let mut path: Vec<ItemId> = vec![root];
        let mut on_path: HashSet<ItemId> = HashSet::from([root]);
        let mut finished: HashSet<ItemId> = HashSet::new();
        let mut stack = vec![PathFrame {
            product: root,
            edges: repository.edges_for_product(root),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(&edge) = frame.edges.get(frame.next) else {
                let product = frame.product;
                stack.pop();
                path.pop();
                on_path.remove(&product);
                finished.insert(product);
                continue;
            };
            frame.next += 1;

            let child = edge.component_id();
            if on_path.contains(&child) {
                let start = path.iter().position(|id| *id == child).unwrap_or(0);
                let mut cycle = path[start..].to_vec();
                cycle.push(child);
                issues.push(BomIssue::CircularDependency { path: cycle });
                continue;
            }

            if finished.contains(&child) || !repository.has_bom(child) {
                continue;
            }

            path.push(child);
            on_path.insert(child);
            stack.push(PathFrame {
                product: child,
                edges: repository.edges_for_product(child),
                next: 0,
            });
        }

        issues
    }

    fn find_duplicate_components(product_id: ItemId, direct: &[&BomEdge]) -> Vec<BomIssue> {
        let mut counts: HashMap<(&str, ItemId), usize> = HashMap::new();
        let mut issues = Vec::new();

        for edge in direct {
            let key = (edge.operation_group(), edge.component_id());
            let count = counts.entry(key).or_insert(0);
            *count += 1;
            // Report on the second occurrence only
            if *count == 2 {
                issues.push(BomIssue::DuplicateComponent {
                    product: product_id,
                    operation: edge.operation_group().to_string(),
                    component: edge.component_id(),
                });
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom_analysis::domain::Item;

    fn edge(id: u64, product: u64, component: u64, operation: Option<&str>) -> BomEdge {
        BomEdge::new(
            id,
            Item::new(product, format!("P{}", product)),
            Item::new(component, format!("C{}", component)),
            1.0,
            operation.map(str::to_string),
        )
        .unwrap()
    }

    #[test]
    fn test_valid_tree() {
        let repo = BomRepository::new(vec![
            edge(1, 1, 2, Some("Assemble")),
            edge(2, 2, 3, None),
            edge(3, 1, 4, Some("Assemble")),
        ]);

        let report = BomValidator::new().validate(&repo, ItemId::new(1));
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn test_no_bom_entries() {
        let repo = BomRepository::new(vec![edge(1, 1, 2, None)]);

        let report = BomValidator::new().validate(&repo, ItemId::new(2));
        assert!(!report.is_valid());
        assert_eq!(report.errors(), vec!["Product 2 has no BOM entries"]);
    }

    #[test]
    fn test_allow_leaf_items_accepts_consumed_leaf() {
        let repo = BomRepository::new(vec![edge(1, 1, 2, None)]);
        let validator = BomValidator::with_options(ValidationOptions {
            allow_leaf_items: true,
        });

        assert!(validator.validate(&repo, ItemId::new(2)).is_valid());
        // Unknown ids are still missing data
        assert!(!validator.validate(&repo, ItemId::new(42)).is_valid());
    }

    #[test]
    fn test_three_cycle_detected() {
        let repo = BomRepository::new(vec![
            edge(1, 1, 2, None),
            edge(2, 2, 3, None),
            edge(3, 3, 1, None),
        ]);

        let report = BomValidator::new().validate(&repo, ItemId::new(1));
        assert!(!report.is_valid());
        assert!(report.has_cycle());
        assert_eq!(
            report.errors(),
            vec!["Circular dependency detected: 1 -> 2 -> 3 -> 1"]
        );
    }

    #[test]
    fn test_cycle_below_root_reports_cycle_members_only() {
        let repo = BomRepository::new(vec![
            edge(1, 1, 2, None),
            edge(2, 2, 3, None),
            edge(3, 3, 2, None),
        ]);

        let report = BomValidator::new().validate(&repo, ItemId::new(1));
        assert_eq!(
            report.errors(),
            vec!["Circular dependency detected: 2 -> 3 -> 2"]
        );
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let repo = BomRepository::new(vec![
            edge(1, 1, 2, None),
            edge(2, 1, 3, None),
            edge(3, 2, 4, None),
            edge(4, 3, 4, None),
            edge(5, 4, 5, None),
        ]);

        let report = BomValidator::new().validate(&repo, ItemId::new(1));
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors());
    }

    #[test]
    fn test_sibling_reuse_is_not_a_cycle() {
        // Sub-assembly 2 used twice under different operations of product 1
        let repo = BomRepository::new(vec![
            edge(1, 1, 2, Some("Cut")),
            edge(2, 1, 2, Some("Weld")),
            edge(3, 2, 3, None),
        ]);

        let report = BomValidator::new().validate(&repo, ItemId::new(1));
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors());
    }

    #[test]
    fn test_duplicate_component_in_operation() {
        let repo = BomRepository::new(vec![
            edge(1, 1, 5, Some("Assembly")),
            edge(2, 1, 5, Some("Assembly")),
        ]);

        let report = BomValidator::new().validate(&repo, ItemId::new(1));
        let errors = report.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("component 5"));
        assert!(errors[0].contains("Assembly"));
    }

    #[test]
    fn test_triplicate_component_reported_once() {
        let repo = BomRepository::new(vec![
            edge(1, 1, 5, Some("Assembly")),
            edge(2, 1, 5, Some("Assembly")),
            edge(3, 1, 5, Some("Assembly")),
            edge(4, 1, 6, Some("Assembly")),
        ]);

        let report = BomValidator::new().validate(&repo, ItemId::new(1));
        assert_eq!(
            report.errors(),
            vec!["Duplicate component 5 in operation 'Assembly' of product 1"]
        );
    }

    #[test]
    fn test_duplicate_in_default_group() {
        let repo = BomRepository::new(vec![edge(1, 1, 5, None), edge(2, 1, 5, None)]);

        let report = BomValidator::new().validate(&repo, ItemId::new(1));
        assert_eq!(
            report.errors(),
            vec!["Duplicate component 5 in operation 'default' of product 1"]
        );
    }

    #[test]
    fn test_same_component_in_different_operations_is_allowed() {
        let repo = BomRepository::new(vec![
            edge(1, 1, 5, Some("Assembly")),
            edge(2, 1, 5, Some("Packaging")),
        ]);

        assert!(BomValidator::new().validate(&repo, ItemId::new(1)).is_valid());
    }

    #[test]
    fn test_errors_accumulate() {
        let repo = BomRepository::new(vec![
            edge(1, 1, 2, Some("Assembly")),
            edge(2, 1, 2, Some("Assembly")),
            edge(3, 2, 1, None),
        ]);

        let report = BomValidator::new().validate(&repo, ItemId::new(1));
        assert!(report.has_cycle());
        assert_eq!(report.issues().len(), 2);
    }

    #[test]
    fn test_validate_all_covers_each_product() {
        let repo = BomRepository::new(vec![edge(1, 1, 2, None), edge(2, 2, 3, None)]);

        let reports = BomValidator::new().validate_all(&repo);
        let ids: Vec<ItemId> = reports.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![ItemId::new(1), ItemId::new(2)]);
        assert!(reports.iter().all(|(_, report)| report.is_valid()));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let depth = 100_000u64;
        let edges = (0..depth).map(|i| edge(i, i, i + 1, None)).collect();
        let repo = BomRepository::new(edges);

        assert!(BomValidator::new().validate(&repo, ItemId::new(0)).is_valid());
    }
}
