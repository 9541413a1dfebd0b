//! Integration tests for the inventory projection, statistics and export.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use stockroom_admin::export::export_csv;
use stockroom_admin::projection::{InventoryStats, SearchScope, SortKey, ViewQuery, project};
use stockroom_admin::{AdminEvent, Classic, InventoryApp, Ledger};
use stockroom_core::{MemoryStorage, StockBadge, StockPolicy};
use stockroom_integration_tests::{fixed_now, form, jewelry_fixture, product};

// =============================================================================
// Projection
// =============================================================================

#[test]
fn test_filter_rings_preserves_order() {
    let records = jewelry_fixture();
    let query = ViewQuery {
        category: Some("rings".to_string()),
        ..ViewQuery::default()
    };
    let names: Vec<&str> = project(&records, &query, SearchScope::NameAndDescription)
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Anillo de Mariposa", "Anillo de Flores"]);
}

#[test]
fn test_sort_by_quantity_descending() {
    let records = jewelry_fixture();
    let query = ViewQuery {
        sort: SortKey::Quantity,
        ..ViewQuery::default()
    };
    let quantities: Vec<i64> = project(&records, &query, SearchScope::Name)
        .iter()
        .map(|p| p.quantity)
        .collect();
    assert_eq!(quantities, vec![45, 15, 3]);
}

#[test]
fn test_search_scope_differs_by_line() {
    let mut records = jewelry_fixture();
    records[1].description = Some("Perlas cultivadas".to_string());
    let query = ViewQuery {
        search: "CULTIVADAS".to_string(),
        ..ViewQuery::default()
    };
    assert_eq!(project(&records, &query, SearchScope::NameAndDescription).len(), 1);
    assert!(project(&records, &query, SearchScope::Name).is_empty());
}

// =============================================================================
// Statistics and Badges
// =============================================================================

#[test]
fn test_stats_total_and_low_stock() {
    let records = vec![
        product(1, "Laptop", "Electrónica", 15, Decimal::new(89999, 2)),
        product(2, "Café", "Alimentos", 3, Decimal::new(1599, 2)),
    ];
    let items = project(&records, &ViewQuery::default(), SearchScope::Name);
    let stats = InventoryStats::compute(&items, StockPolicy::CLASSIC);

    assert_eq!(stats.item_count, 2);
    assert_eq!(stats.total_value, Decimal::new(1_354_782, 2));
    assert_eq!(stats.low_stock_count, 1);
}

#[test]
fn test_stats_follow_the_filter() {
    let records = jewelry_fixture();
    let query = ViewQuery {
        category: Some("necklaces".to_string()),
        ..ViewQuery::default()
    };
    let items = project(&records, &query, SearchScope::Name);
    let stats = InventoryStats::compute(&items, StockPolicy::CLASSIC);
    assert_eq!(stats.item_count, 1);
    assert_eq!(stats.total_value, Decimal::from(31_500));
    assert_eq!(stats.low_stock_count, 0);
}

#[test]
fn test_tiered_badge_boundaries() {
    let policy = StockPolicy::TIERED;
    assert_eq!(policy.badge(0), StockBadge::NoStock);
    assert_eq!(policy.badge(4), StockBadge::Low);
    assert_eq!(policy.badge(5), StockBadge::Normal);
    assert_eq!(policy.badge(50), StockBadge::Normal);
    assert_eq!(policy.badge(51), StockBadge::High);
}

#[test]
fn test_thresholds_stay_distinct_per_line() {
    let mut classic: InventoryApp<Classic, _> = InventoryApp::open(MemoryStorage::new());
    let mut ledger: InventoryApp<Ledger, _> = InventoryApp::open(MemoryStorage::new());
    for quantity in ["0", "7", "60"] {
        classic.dispatch_at(AdminEvent::Submit(form("Gorra", "Ropa", quantity, "10")), fixed_now());
        ledger.dispatch_at(AdminEvent::Submit(form("Gorra", "Ropa", quantity, "10")), fixed_now());
    }

    let classic_view = classic.view();
    let ledger_view = ledger.view();
    assert_eq!(classic_view.stats.low_stock_count, 2);
    assert_eq!(ledger_view.stats.low_stock_count, 1);

    let ledger_labels: Vec<&str> = ledger_view.cards.iter().map(|c| c.badge_label).collect();
    assert_eq!(ledger_labels, vec!["Sin stock", "Normal", "Stock alto"]);
}

// =============================================================================
// CSV Export
// =============================================================================

#[test]
fn test_single_item_export_has_two_lines() {
    let records = vec![product(1, "Laptop", "Electrónica", 15, Decimal::new(89999, 2))];
    let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let export = export_csv(&records, date).unwrap();

    assert!(export.contents.ends_with('\n'));
    let lines: Vec<&str> = export.contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "ID,Nombre,Categoría,Cantidad,Precio,Valor Total,Descripción");
    assert!(lines[1].starts_with("\"1\",\"Laptop\""));
}

#[test]
fn test_export_ignores_active_filters() {
    let mut app: InventoryApp<Classic, _> = InventoryApp::open(MemoryStorage::new());
    app.dispatch_at(AdminEvent::Submit(form("Gorra", "Ropa", "3", "10")), fixed_now());
    app.dispatch_at(AdminEvent::Submit(form("Laptop", "Electrónica", "2", "900")), fixed_now());
    app.dispatch_at(AdminEvent::FilterCategory(Some("Ropa".to_string())), fixed_now());

    let out = app.dispatch_at(AdminEvent::Export, fixed_now());
    assert_eq!(out.view.cards.len(), 1);
    let export = out.download.unwrap();
    assert_eq!(export.filename, "inventario_2025-10-09.csv");
    assert_eq!(export.contents.lines().count(), 3);
}
