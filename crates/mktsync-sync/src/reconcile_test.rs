use chrono::TimeZone;

use super::*;

fn ts() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap()
}

fn known(ids: &[&str]) -> KnownOffers {
    ids.iter().copied().collect()
}

fn counts(updates: &[StockUpdate]) -> Vec<(&str, i64)> {
    updates.iter().map(|u| (u.sku.as_str(), u.count)).collect()
}

#[test]
fn scenario_matched_sentinels_and_residual_zero() {
    let inventory = vec![
        InventoryRecord::new("A", ">10", "5'990.00 руб."),
        InventoryRecord::new("B", "1", "1'200.00 руб."),
    ];
    let known = known(&["A", "B", "C"]);

    let stock = reconcile_stock(&inventory, &known, "500001", ts()).unwrap();
    assert_eq!(counts(&stock.updates), vec![("A", 100), ("B", 0), ("C", 0)]);
    assert_eq!(stock.unmatched, vec!["C"]);

    let prices = reconcile_prices(&inventory, &known).unwrap();
    let ids: Vec<_> = prices.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);
    assert_eq!(prices[0].value, 5990);
    assert_eq!(prices[1].value, 1200);
}

#[test]
fn all_updates_share_warehouse_and_timestamp() {
    let inventory = vec![InventoryRecord::new("A", "3", "10")];
    let stock = reconcile_stock(&inventory, &known(&["A", "Z"]), "77", ts()).unwrap();
    assert!(stock
        .updates
        .iter()
        .all(|u| u.warehouse_id == "77" && u.updated_at == ts()));
}

#[test]
fn every_known_id_appears_exactly_once() {
    let inventory = vec![
        InventoryRecord::new("A", "5", "1"),
        InventoryRecord::new("A", "7", "1"),
        InventoryRecord::new("X", "2", "1"),
        InventoryRecord::new("C", ">10", "1"),
    ];
    let known = known(&["C", "A", "B", "D"]);

    let stock = reconcile_stock(&inventory, &known, "w", ts()).unwrap();

    for id in known.iter() {
        let occurrences = stock.updates.iter().filter(|u| u.sku == id).count();
        assert_eq!(occurrences, 1, "{id} should appear exactly once");
    }
    assert_eq!(stock.updates.len(), known.len());
    // first row for a duplicated code wins
    assert_eq!(counts(&stock.updates)[0], ("A", 5));
}

#[test]
fn pass_one_precedes_residuals() {
    let inventory = vec![
        InventoryRecord::new("C", "4", "1"),
        InventoryRecord::new("A", "2", "1"),
    ];
    let stock = reconcile_stock(&inventory, &known(&["A", "B", "C", "D"]), "w", ts()).unwrap();
    assert_eq!(
        counts(&stock.updates),
        vec![("C", 4), ("A", 2), ("B", 0), ("D", 0)]
    );
}

#[test]
fn unknown_inventory_rows_are_ignored() {
    let inventory = vec![InventoryRecord::new("NOT-LISTED", "abc", "n/a")];
    let stock = reconcile_stock(&inventory, &known(&["A"]), "w", ts()).unwrap();
    assert_eq!(counts(&stock.updates), vec![("A", 0)]);
    assert!(reconcile_prices(&inventory, &known(&["A"])).unwrap().is_empty());
}

#[test]
fn empty_known_set_yields_nothing() {
    let inventory = vec![InventoryRecord::new("A", "3", "10")];
    let stock = reconcile_stock(&inventory, &KnownOffers::default(), "w", ts()).unwrap();
    assert!(stock.updates.is_empty());
    assert!(stock.unmatched.is_empty());
}

#[test]
fn known_set_is_reusable_and_output_is_stable() {
    let inventory = vec![
        InventoryRecord::new("A", ">10", "1"),
        InventoryRecord::new("B", "1", "1"),
    ];
    let known = known(&["A", "B", "C"]);
    let first = reconcile_stock(&inventory, &known, "w", ts()).unwrap();
    let second = reconcile_stock(&inventory, &known, "w", ts()).unwrap();
    assert_eq!(first, second);
    assert_eq!(known.len(), 3, "known offers must not be consumed");
}

#[test]
fn available_filters_zero_counts() {
    let inventory = vec![
        InventoryRecord::new("A", ">10", "1"),
        InventoryRecord::new("B", "1", "1"),
        InventoryRecord::new("C", "0", "1"),
    ];
    let stock = reconcile_stock(&inventory, &known(&["A", "B", "C", "D"]), "w", ts()).unwrap();
    let available: Vec<_> = stock.available().map(|u| u.sku.as_str()).collect();
    assert_eq!(available, vec!["A"]);
}

#[test]
fn oversold_row_keeps_its_negative_count() {
    let inventory = vec![
        InventoryRecord::new("A", "-3", "1"),
        InventoryRecord::new("B", " 1", "1"),
    ];
    let stock = reconcile_stock(&inventory, &known(&["A", "B", "C"]), "w", ts()).unwrap();
    assert_eq!(counts(&stock.updates), vec![("A", -3), ("B", 1), ("C", 0)]);
}

#[test]
fn invalid_quantity_on_matched_row_fails_with_code() {
    let inventory = vec![InventoryRecord::new("A", "many", "1")];
    let err = reconcile_stock(&inventory, &known(&["A"]), "w", ts()).unwrap_err();
    assert!(
        matches!(
            err,
            SyncError::Record { ref code, source: CoreError::InvalidQuantity { .. } } if code == "A"
        ),
        "got: {err:?}"
    );
    assert!(!err.is_transient());
}

#[test]
fn prices_are_truncated_not_rounded() {
    let inventory = vec![InventoryRecord::new("A", "2", "1'499.99 руб.")];
    let prices = reconcile_prices(&inventory, &known(&["A"])).unwrap();
    assert_eq!(prices[0].value, 1499);
}

#[test]
fn prices_skip_duplicate_codes() {
    let inventory = vec![
        InventoryRecord::new("A", "2", "100"),
        InventoryRecord::new("A", "2", "200"),
    ];
    let prices = reconcile_prices(&inventory, &known(&["A"])).unwrap();
    assert_eq!(prices.len(), 1);
    assert_eq!(prices[0].value, 100);
}

#[test]
fn price_output_bounded_by_both_inputs() {
    let inventory: Vec<_> = (0..20)
        .map(|i| InventoryRecord::new(i.to_string(), "3", format!("{}.50", i * 10)))
        .collect();
    let ids: Vec<String> = (10..40).map(|i| i.to_string()).collect();
    let known: KnownOffers = ids.iter().cloned().collect();

    let prices = reconcile_prices(&inventory, &known).unwrap();
    assert!(prices.len() <= known.len());
    assert!(prices.len() <= inventory.len());
    for price in &prices {
        assert!(known.contains(&price.id));
        assert!(inventory.iter().any(|r| r.code == price.id));
    }
    assert_eq!(prices.len(), 10);
}

#[test]
fn invalid_price_on_matched_row_fails() {
    let inventory = vec![InventoryRecord::new("A", "2", "по запросу")];
    let err = reconcile_prices(&inventory, &known(&["A"])).unwrap_err();
    assert!(matches!(
        err,
        SyncError::Record {
            source: CoreError::InvalidPrice { .. },
            ..
        }
    ));
}
