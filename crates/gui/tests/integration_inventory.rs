//! Integration tests for the inventory tree: search, deletes, labels.

use stowage_gui_lib::fixtures;
use stowage_gui_lib::harness::TestHarness;
use stowage_gui_lib::labels;
use stowage_gui_lib::state::{EntityKind, PendingDelete};

#[test]
fn test_search_ignores_diacritics_both_ways() {
    let h = TestHarness::with_snapshot(fixtures::pantry_snapshot());

    // Plain query, accented name
    let hits = h.search("vanilkovy");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].item_name, "Vanilkový cukr");
    assert!(!hits[0].is_ai);

    // Accented query, plain-enough name
    let hits = h.search("MOUKA HLADKÁ");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].item_name, "Mouka hladká");
}

#[test]
fn test_search_result_carries_the_full_path() {
    let h = TestHarness::with_snapshot(fixtures::pantry_snapshot());
    let hits = h.search("cukr");
    assert_eq!(hits.len(), 1);
    let path = &hits[0].path;
    assert_eq!(path.cabinet_id, "cab1");
    assert_eq!(path.shelf_id, "sh1");
    assert_eq!(path.box_id.as_deref(), Some("bx1"));
    assert!(hits[0].reason.contains("Špajz"));
}

#[test]
fn test_empty_query_returns_nothing() {
    let h = TestHarness::with_snapshot(fixtures::pantry_snapshot());
    assert!(h.search("").is_empty());
    assert!(h.search("   ").is_empty());
}

#[test]
fn test_deleting_a_box_keeps_items_findable() {
    let mut h = TestHarness::with_snapshot(fixtures::pantry_snapshot());

    h.inventory.execute_delete(&PendingDelete {
        kind: EntityKind::Box,
        id: "bx1".into(),
        name: "Pečení".into(),
    });

    let hits = h.search("cukr");
    assert_eq!(hits.len(), 1);
    assert!(hits[0].path.box_id.is_none());
    assert_eq!(h.inventory.item_count(), 2);
}

#[test]
fn test_flattened_inventory_resolves_names() {
    let h = TestHarness::with_snapshot(fixtures::pantry_snapshot());
    let flat = h.inventory.flattened();
    assert_eq!(flat.len(), 2);

    let boxed = flat.iter().find(|e| e.item == "Vanilkový cukr").unwrap();
    assert_eq!(boxed.r#box.as_deref(), Some("Pečení"));
    assert_eq!(boxed.shelf, "Police 1");
    assert_eq!(boxed.cabinet, "Špajz");
    assert_eq!(boxed.room.as_deref(), Some("Kuchyň"));
}

#[test]
fn test_label_cards_follow_the_print_queue() {
    let mut h = TestHarness::with_snapshot(fixtures::pantry_snapshot());
    assert!(labels::collect_cards(&h.inventory.snapshot).is_empty());

    h.inventory.toggle_print_selection("cab1");
    h.inventory.toggle_print_selection("bx1");
    h.inventory.toggle_print_selection("i1");

    let cards = labels::collect_cards(&h.inventory.snapshot);
    let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Špajz", "Pečení", "Mouka hladká"]);

    // The box card says which shelf it lives on
    assert!(cards[1].sub.iter().any(|s| s.contains("Police 1")));

    h.inventory.clear_print_selection();
    assert!(labels::collect_cards(&h.inventory.snapshot).is_empty());
}

#[test]
fn test_label_sheet_escapes_and_renders_every_card() {
    let mut h = TestHarness::with_snapshot(fixtures::pantry_snapshot());
    let cab = h.create_cabinet();
    let shelf = h.first_shelf(&cab);
    h.add_item(&cab, &shelf, "Šroubky <M5>");
    let item_id = h.search("sroubky")[0].item_id.clone();
    h.inventory.toggle_print_selection(&item_id);

    let cards = labels::collect_cards(&h.inventory.snapshot);
    let html = labels::render_sheet(&cards);
    assert!(html.contains("Šroubky &lt;M5&gt;"));
    assert!(!html.contains("<M5>"));
    assert!(html.contains("lang=\"cs\""));
}

#[test]
fn test_requesting_a_delete_mutates_nothing_until_executed() {
    let mut h = TestHarness::with_snapshot(fixtures::pantry_snapshot());
    let version = h.inventory.version();

    h.nav.request_delete(EntityKind::Item, "i1".into(), "Mouka hladká");
    // Cancelling just discards the request
    h.nav.confirm_delete = None;

    assert_eq!(h.inventory.version(), version);
    assert_eq!(h.inventory.item_count(), 2);
}

#[test]
fn test_stale_delete_request_is_harmless() {
    let mut h = TestHarness::with_snapshot(fixtures::pantry_snapshot());
    let count = h.inventory.item_count();
    h.inventory.execute_delete(&PendingDelete {
        kind: EntityKind::Item,
        id: "gone".into(),
        name: "Neexistuje".into(),
    });
    assert_eq!(h.inventory.item_count(), count);
}
