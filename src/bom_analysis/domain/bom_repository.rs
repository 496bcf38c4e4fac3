use super::{BomEdge, Item, ItemId};
use std::collections::{HashMap, HashSet};

/// BomRepository aggregate holding the flat, ordered list of BOM edges.
///
/// Edge order is arrival order from the source. The repository is replaced
/// wholesale on every load and never edited in place, so the per-product index
/// is rebuilt with it.
///
/// The query methods here never traverse the graph and never fail: a query with
/// no matches returns an empty collection.
#[derive(Debug, Clone, Default)]
pub struct BomRepository {
    edges: Vec<BomEdge>,
    by_product: HashMap<ItemId, Vec<usize>>,
}

impl BomRepository {
    pub fn new(edges: Vec<BomEdge>) -> Self {
        let mut by_product: HashMap<ItemId, Vec<usize>> = HashMap::new();
        for (index, edge) in edges.iter().enumerate() {
            by_product.entry(edge.product_id()).or_default().push(index);
        }

        Self { edges, by_product }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn edges(&self) -> &[BomEdge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Direct BOM of `product_id`, in original order
    pub fn edges_for_product(&self, product_id: ItemId) -> Vec<&BomEdge> {
        self.by_product
            .get(&product_id)
            .map(|indices| indices.iter().map(|&i| &self.edges[i]).collect())
            .unwrap_or_default()
    }

    /// Every edge that consumes `component_id` ("where used")
    pub fn edges_for_component(&self, component_id: ItemId) -> Vec<&BomEdge> {
        self.edges
            .iter()
            .filter(|edge| edge.component_id() == component_id)
            .collect()
    }

    /// Edges whose operation label equals `operation` exactly (case-sensitive)
    pub fn edges_for_operation(&self, operation: &str) -> Vec<&BomEdge> {
        self.edges
            .iter()
            .filter(|edge| edge.operation() == Some(operation))
            .collect()
    }

    /// Whether `id` has BOM edges of its own, i.e. is an assembly
    pub fn has_bom(&self, id: ItemId) -> bool {
        self.by_product.contains_key(&id)
    }

    /// Whether `id` is consumed by at least one edge
    pub fn is_component(&self, id: ItemId) -> bool {
        self.edges.iter().any(|edge| edge.component_id() == id)
    }

    /// Products in first-seen order; the first embedded entity for an id wins
    pub fn unique_products(&self) -> Vec<&Item> {
        first_seen(self.edges.iter().map(BomEdge::product))
    }

    /// Components in first-seen order; the first embedded entity for an id wins
    pub fn unique_components(&self) -> Vec<&Item> {
        first_seen(self.edges.iter().map(BomEdge::component))
    }

    /// Entity for `id`, looked up among products first, then components
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.by_product
            .get(&id)
            .and_then(|indices| indices.first())
            .map(|&i| self.edges[i].product())
            .or_else(|| {
                self.edges
                    .iter()
                    .find(|edge| edge.component_id() == id)
                    .map(BomEdge::component)
            })
    }

    /// Distinct operation labels in first-seen order
    pub fn operations(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.edges
            .iter()
            .filter_map(BomEdge::operation)
            .filter(|op| seen.insert(*op))
            .collect()
    }
}

fn first_seen<'a>(items: impl Iterator<Item = &'a Item>) -> Vec<&'a Item> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(item.id())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(id: u64, product: u64, component: u64, quantity: f64, operation: Option<&str>) -> BomEdge {
        BomEdge::new(
            id,
            Item::new(product, format!("P{}", product)),
            Item::new(component, format!("C{}", component)),
            quantity,
            operation.map(str::to_string),
        )
        .unwrap()
    }

    fn sample_repository() -> BomRepository {
        BomRepository::new(vec![
            edge(1, 1, 2, 3.0, Some("Assemble")),
            edge(2, 2, 3, 2.0, None),
            edge(3, 1, 4, 1.0, Some("Paint")),
            edge(4, 5, 3, 6.0, Some("Assemble")),
        ])
    }

    #[test]
    fn test_edges_for_product_preserves_order() {
        let repo = sample_repository();
        let ids: Vec<u64> = repo.edges_for_product(ItemId::new(1)).iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_edges_for_product_unknown_is_empty() {
        let repo = sample_repository();
        assert!(repo.edges_for_product(ItemId::new(99)).is_empty());
    }

    #[test]
    fn test_edges_for_component() {
        let repo = sample_repository();
        let ids: Vec<u64> = repo.edges_for_component(ItemId::new(3)).iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_edges_for_operation_is_case_sensitive() {
        let repo = sample_repository();
        assert_eq!(repo.edges_for_operation("Assemble").len(), 2);
        assert!(repo.edges_for_operation("assemble").is_empty());
    }

    #[test]
    fn test_edges_for_operation_matches_whitespace_label_exactly() {
        let repo = BomRepository::new(vec![
            edge(1, 1, 2, 1.0, Some("  ")),
            edge(2, 1, 3, 1.0, Some(" ")),
        ]);
        let ids: Vec<u64> = repo.edges_for_operation("  ").iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_has_bom_and_is_component() {
        let repo = sample_repository();
        assert!(repo.has_bom(ItemId::new(2)));
        assert!(!repo.has_bom(ItemId::new(3)));
        assert!(repo.is_component(ItemId::new(3)));
        assert!(!repo.is_component(ItemId::new(1)));
    }

    #[test]
    fn test_unique_products_first_seen_wins() {
        let repo = BomRepository::new(vec![
            BomEdge::new(1, Item::new(1, "Original"), Item::new(2, "A"), 1.0, None).unwrap(),
            BomEdge::new(2, Item::new(1, "Renamed"), Item::new(3, "B"), 1.0, None).unwrap(),
        ]);

        let products = repo.unique_products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name(), "Original");
    }

    #[test]
    fn test_unique_components() {
        let repo = sample_repository();
        let ids: Vec<ItemId> = repo.unique_components().iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec![ItemId::new(2), ItemId::new(3), ItemId::new(4)]);
    }

    #[test]
    fn test_operations_distinct() {
        let repo = sample_repository();
        assert_eq!(repo.operations(), vec!["Assemble", "Paint"]);
    }

    #[test]
    fn test_item_lookup() {
        let repo = sample_repository();
        assert_eq!(repo.item(ItemId::new(1)).map(Item::name), Some("P1"));
        assert_eq!(repo.item(ItemId::new(3)).map(Item::name), Some("C3"));
        assert!(repo.item(ItemId::new(99)).is_none());
    }

    #[test]
    fn test_empty_repository() {
        let repo = BomRepository::empty();
        assert!(repo.is_empty());
        assert_eq!(repo.len(), 0);
        assert!(repo.unique_products().is_empty());
        assert!(repo.edges_for_operation("Assemble").is_empty());
    }
}
