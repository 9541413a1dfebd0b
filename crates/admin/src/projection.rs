//! View projection: filtering, sorting and summary statistics.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::locale;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockroom_core::{Listing, StockPolicy};
use tracing::warn;

/// Field the projection is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Insertion order.
    #[default]
    None,
    /// Name, ascending, Spanish collation, case-insensitive.
    Name,
    /// Category, ascending, Spanish collation, case-insensitive.
    Category,
    /// Quantity, descending.
    Quantity,
    /// Unit price, descending.
    Price,
    /// `quantity × price`, descending.
    Total,
}

impl SortKey {
    /// Every sort key, in selector order.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Name,
        Self::Category,
        Self::Quantity,
        Self::Price,
        Self::Total,
    ];

    /// Selector value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Name => "name",
            Self::Category => "category",
            Self::Quantity => "quantity",
            Self::Price => "price",
            Self::Total => "total",
        }
    }

    /// Selector label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Sin ordenar",
            Self::Name => "Nombre",
            Self::Category => "Categoría",
            Self::Quantity => "Cantidad",
            Self::Price => "Precio",
            Self::Total => "Valor total",
        }
    }

    fn compare<R: Listing>(self, a: &R, b: &R, text: &TextOrder) -> Ordering {
        match self {
            Self::None => Ordering::Equal,
            Self::Name => text.compare(a.name(), b.name()),
            Self::Category => text.compare(a.category(), b.category()),
            Self::Quantity => b.quantity().cmp(&a.quantity()),
            Self::Price => b.price().cmp(&a.price()),
            Self::Total => b.total_value().cmp(&a.total_value()),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(Self::None),
            "name" => Ok(Self::Name),
            "category" => Ok(Self::Category),
            "quantity" => Ok(Self::Quantity),
            "price" => Ok(Self::Price),
            "total" => Ok(Self::Total),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

/// Which text fields the search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchScope {
    Name,
    NameAndDescription,
}

/// Current search box, category filter and sort selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    pub category: Option<String>,
    pub sort: SortKey,
}

impl ViewQuery {
    /// Whether any filter or sort is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.category_filter().is_some() || self.sort != SortKey::None
    }

    fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// Derive the filtered and sorted subsequence shown to the user.
///
/// Sorting is stable, so ties (and [`SortKey::None`]) keep insertion order.
#[must_use]
pub fn project<'a, R: Listing>(
    records: &'a [R],
    query: &ViewQuery,
    scope: SearchScope,
) -> Vec<&'a R> {
    let term = query.search.trim().to_lowercase();
    let category = query.category_filter();

    let mut items: Vec<&R> = records
        .iter()
        .filter(|r| term.is_empty() || matches_term(*r, &term, scope))
        .filter(|r| category.is_none_or(|c| r.category() == c))
        .collect();

    if query.sort != SortKey::None {
        let text = TextOrder::spanish();
        items.sort_by(|a, b| query.sort.compare(*a, *b, &text));
    }
    items
}

fn matches_term<R: Listing>(record: &R, term: &str, scope: SearchScope) -> bool {
    if record.name().to_lowercase().contains(term) {
        return true;
    }
    match scope {
        SearchScope::Name => false,
        SearchScope::NameAndDescription => record
            .description()
            .is_some_and(|d| d.to_lowercase().contains(term)),
    }
}

/// Ascending text order for names and categories.
///
/// Spanish collation at secondary strength: case is ignored, accents only
/// break ties between otherwise equal words, and `ñ` sorts after `n`. Exact
/// text breaks the remaining ties so the order is total.
struct TextOrder {
    collator: Option<CollatorBorrowed<'static>>,
}

impl TextOrder {
    fn spanish() -> Self {
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Secondary);
        let collator = Collator::try_new(locale!("es").into(), options)
            .inspect_err(|e| warn!(error = %e, "Spanish collation unavailable, sorting by lowercase text"))
            .ok();
        Self { collator }
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        let primary = match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        };
        primary.then_with(|| a.cmp(b))
    }
}

/// Summary figures over a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InventoryStats {
    /// Number of records shown.
    pub item_count: usize,
    /// Sum of `quantity × price`, saturating at the bounds of [`Decimal`].
    pub total_value: Decimal,
    /// Records flagged by the stock policy.
    pub low_stock_count: usize,
}

impl InventoryStats {
    /// Compute the figures for the given (already filtered) records.
    #[must_use]
    pub fn compute<R: Listing>(items: &[&R], policy: StockPolicy) -> Self {
        items.iter().fold(Self::default(), |mut stats, item| {
            stats.item_count += 1;
            stats.total_value = stats.total_value.saturating_add(item.total_value());
            if policy.is_low(item.quantity()) {
                stats.low_stock_count += 1;
            }
            stats
        })
    }
}

/// Distinct categories present in the collection, in the same order the
/// category sort uses, for the filter selector.
#[must_use]
pub fn categories<R: Listing>(records: &[R]) -> Vec<String> {
    let mut categories: Vec<String> = records
        .iter()
        .map(|r| r.category().to_owned())
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let text = TextOrder::spanish();
    categories.sort_by(|a, b| text.compare(a, b));
    categories
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use stockroom_core::{Product, ProductDraft, ProductId};

    use super::*;

    fn product(id: i64, name: &str, category: &str, quantity: i64, price: &str) -> Product {
        Product::from_draft(
            ProductId::new(id),
            ProductDraft {
                name: name.to_string(),
                category: category.to_string(),
                quantity,
                price: Decimal::from_str(price).unwrap(),
                description: Some(format!("{name} de prueba")),
            },
        )
    }

    fn jewelry() -> Vec<Product> {
        vec![
            product(1, "Anillo de Mariposa", "rings", 3, "500"),
            product(2, "Collar de Perlas", "necklaces", 45, "800"),
            product(3, "Anillo de Flores", "rings", 15, "300"),
        ]
    }

    fn ids(items: &[&Product]) -> Vec<i64> {
        items.iter().map(|p| p.id.as_i64()).collect()
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let records = jewelry();
        let query = ViewQuery {
            category: Some("rings".to_string()),
            ..ViewQuery::default()
        };
        let items = project(&records, &query, SearchScope::Name);
        assert_eq!(ids(&items), vec![1, 3]);
    }

    #[test]
    fn test_empty_category_means_all() {
        let records = jewelry();
        let query = ViewQuery {
            category: Some(String::new()),
            ..ViewQuery::default()
        };
        assert_eq!(project(&records, &query, SearchScope::Name).len(), 3);
    }

    #[test]
    fn test_sort_quantity_descending() {
        let records = jewelry();
        let query = ViewQuery {
            sort: SortKey::Quantity,
            ..ViewQuery::default()
        };
        let items = project(&records, &query, SearchScope::Name);
        let quantities: Vec<i64> = items.iter().map(|p| p.quantity).collect();
        assert_eq!(quantities, vec![45, 15, 3]);
    }

    #[test]
    fn test_sort_name_ascending_case_insensitive() {
        let mut records = jewelry();
        records.push(product(4, "anillo de Oro", "rings", 1, "1"));
        let query = ViewQuery {
            sort: SortKey::Name,
            ..ViewQuery::default()
        };
        let items = project(&records, &query, SearchScope::Name);
        assert_eq!(ids(&items), vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_sort_name_follows_spanish_collation() {
        let records = vec![
            product(1, "Bota", "Ropa", 1, "1"),
            product(2, "Árbol", "Hogar", 1, "1"),
            product(3, "Zapato", "Ropa", 1, "1"),
            product(4, "Oro", "Joyas", 1, "1"),
            product(5, "Ñandú", "Juguetes", 1, "1"),
            product(6, "Nube", "Hogar", 1, "1"),
        ];
        let query = ViewQuery {
            sort: SortKey::Name,
            ..ViewQuery::default()
        };
        let names: Vec<&str> = project(&records, &query, SearchScope::Name)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Árbol", "Bota", "Nube", "Ñandú", "Oro", "Zapato"]);
    }

    #[test]
    fn test_sort_category_ignores_case_and_accents() {
        let records = vec![
            product(1, "a", "Ropa", 1, "1"),
            product(2, "b", "electrónica", 1, "1"),
            product(3, "c", "Alimentos", 1, "1"),
            product(4, "d", "Electrónica", 1, "1"),
        ];
        let query = ViewQuery {
            sort: SortKey::Category,
            ..ViewQuery::default()
        };
        assert_eq!(ids(&project(&records, &query, SearchScope::Name)), vec![3, 4, 2, 1]);
    }

    #[test]
    fn test_stats_saturate_instead_of_overflowing() {
        let records = vec![
            product(1, "Lote", "Ropa", i64::MAX, "99999999999"),
            product(2, "Lote", "Ropa", i64::MAX, "99999999999"),
        ];
        let items = project(&records, &ViewQuery::default(), SearchScope::Name);
        let stats = InventoryStats::compute(&items, StockPolicy::CLASSIC);
        assert_eq!(stats.item_count, 2);
        assert_eq!(stats.total_value, Decimal::MAX);
    }

    #[test]
    fn test_sort_total_descending() {
        let records = jewelry();
        let query = ViewQuery {
            sort: SortKey::Total,
            ..ViewQuery::default()
        };
        // totals: 1500, 36000, 4500
        assert_eq!(ids(&project(&records, &query, SearchScope::Name)), vec![2, 3, 1]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = jewelry();
        let query = ViewQuery {
            search: "ANILLO".to_string(),
            ..ViewQuery::default()
        };
        assert_eq!(ids(&project(&records, &query, SearchScope::Name)), vec![1, 3]);
    }

    #[test]
    fn test_search_scope_controls_description_match() {
        let records = jewelry();
        let query = ViewQuery {
            search: "de prueba".to_string(),
            ..ViewQuery::default()
        };
        assert!(project(&records, &query, SearchScope::Name).is_empty());
        assert_eq!(
            project(&records, &query, SearchScope::NameAndDescription).len(),
            3
        );
    }

    #[test]
    fn test_stats_over_fixture() {
        let records = vec![
            product(1, "Laptop", "Electrónica", 15, "899.99"),
            product(2, "Café", "Alimentos", 3, "15.99"),
        ];
        let items = project(&records, &ViewQuery::default(), SearchScope::Name);
        let stats = InventoryStats::compute(&items, StockPolicy::CLASSIC);
        assert_eq!(stats.item_count, 2);
        assert_eq!(stats.total_value, Decimal::from_str("13547.82").unwrap());
        assert_eq!(stats.low_stock_count, 1);
    }

    #[test]
    fn test_stats_follow_filter() {
        let records = jewelry();
        let query = ViewQuery {
            category: Some("necklaces".to_string()),
            ..ViewQuery::default()
        };
        let items = project(&records, &query, SearchScope::Name);
        let stats = InventoryStats::compute(&items, StockPolicy::CLASSIC);
        assert_eq!(stats.item_count, 1);
        assert_eq!(stats.low_stock_count, 0);
    }

    #[test]
    fn test_categories_distinct_sorted() {
        assert_eq!(categories(&jewelry()), vec!["necklaces", "rings"]);

        let records = vec![
            product(1, "a", "Ropa", 1, "1"),
            product(2, "b", "Électricos", 1, "1"),
            product(3, "c", "Alimentos", 1, "1"),
        ];
        assert_eq!(categories(&records), vec!["Alimentos", "Électricos", "Ropa"]);
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!(SortKey::from_str("total").unwrap(), SortKey::Total);
        assert_eq!(SortKey::from_str("").unwrap(), SortKey::None);
        assert!(SortKey::from_str("color").is_err());
    }
}
