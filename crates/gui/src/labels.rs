//! Printable label sheets: the print queue rendered as a standalone HTML
//! page the user opens in a browser and prints.

use shared::InventorySnapshot;

const CABINET_ACCENT: &str = "#4f46e5";
const BOX_ACCENT: &str = "#64748b";
const ITEM_ACCENT: &str = "#0f172a";

/// Sub-lines shown under a card title
const MAX_SUB_LINES: usize = 5;

/// One label card ready for layout
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCard {
    pub title: String,
    pub sub: Vec<String>,
    /// CSS color of the card's accent stripe
    pub accent: String,
}

/// Resolve the print queue against the tree, in tree order. Queue entries
/// whose entity has since been deleted are skipped.
pub fn collect_cards(snapshot: &InventorySnapshot) -> Vec<LabelCard> {
    let selected = |id: &str| snapshot.selected_for_print.iter().any(|s| s == id);
    let mut cards = Vec::new();

    for cabinet in &snapshot.cabinets {
        if selected(&cabinet.id) {
            cards.push(LabelCard {
                title: cabinet.name.clone(),
                sub: cabinet.shelves.iter().take(MAX_SUB_LINES).map(|s| s.name.clone()).collect(),
                accent: CABINET_ACCENT.into(),
            });
        }
        for shelf in &cabinet.shelves {
            if selected(&shelf.id) {
                cards.push(LabelCard {
                    title: shelf.name.clone(),
                    sub: shelf.items.iter().take(MAX_SUB_LINES).map(|i| i.name.clone()).collect(),
                    accent: shelf.color.clone(),
                });
            }
            for b in &shelf.boxes {
                if selected(&b.id) {
                    cards.push(LabelCard {
                        title: b.name.clone(),
                        sub: vec![format!("V polici: {}", shelf.name)],
                        accent: BOX_ACCENT.into(),
                    });
                }
            }
            for item in &shelf.items {
                if selected(&item.id) {
                    let place = match item
                        .box_id
                        .as_deref()
                        .and_then(|bid| shelf.boxes.iter().find(|b| b.id == bid))
                    {
                        Some(b) => format!("V boxu: {}", b.name),
                        None => format!("V polici: {}", shelf.name),
                    };
                    cards.push(LabelCard {
                        title: item.name.clone(),
                        sub: vec![place],
                        accent: ITEM_ACCENT.into(),
                    });
                }
            }
        }
    }
    cards
}

/// Suggested file name for a generated sheet
pub fn sheet_file_name(now: chrono::DateTime<chrono::Local>) -> String {
    format!("stitky-{}.html", now.format("%Y%m%d-%H%M%S"))
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

/// Render the cards as a self-contained printable page, three columns wide
pub fn render_sheet(cards: &[LabelCard]) -> String {
    let mut body = String::new();
    for card in cards {
        body.push_str(&format!(
            "<div class=\"card\" style=\"border-left-color:{}\"><div class=\"title\">{}</div>",
            escape(&card.accent),
            escape(&card.title)
        ));
        for line in card.sub.iter().take(MAX_SUB_LINES) {
            body.push_str(&format!("<div class=\"sub\">{}</div>", escape(line)));
        }
        body.push_str("</div>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"cs\">\n<head>\n<meta charset=\"utf-8\">\n\
<title>Štítky</title>\n<style>\n\
body {{ font-family: sans-serif; margin: 10mm; }}\n\
.grid {{ display: grid; grid-template-columns: repeat(3, 1fr); gap: 6mm; }}\n\
.card {{ border: 1px solid #cbd5e1; border-left: 4mm solid #000; border-radius: 2mm;\n\
  padding: 4mm; break-inside: avoid; }}\n\
.title {{ font-size: 14pt; font-weight: bold; margin-bottom: 2mm; }}\n\
.sub {{ font-size: 9pt; color: #475569; }}\n\
@media print {{ body {{ margin: 5mm; }} }}\n\
</style>\n</head>\n<body>\n<div class=\"grid\">\n{body}</div>\n</body>\n</html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::InventoryState;

    fn queue_everything() -> (InventorySnapshot, String) {
        let mut inv = InventoryState::default();
        let cab = inv.create_cabinet("p".into());
        inv.rename_cabinet(&cab, "Špajz".into());
        let shelf = inv.cabinet(&cab).unwrap().shelves[0].id.clone();
        let bx = inv.add_box(&cab, &shelf, "Krabice").unwrap();
        let item = inv.add_item(&cab, &shelf, "Mouka & cukr", Some(bx.clone())).unwrap();
        for id in [&cab, &shelf, &bx, &item] {
            inv.toggle_print_selection(id);
        }
        (inv.snapshot, shelf)
    }

    #[test]
    fn test_cards_come_out_in_tree_order_with_context_lines() {
        let (snapshot, _) = queue_everything();
        let cards = collect_cards(&snapshot);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].title, "Špajz");
        assert_eq!(cards[0].sub, vec!["Police 1".to_string()]);
        assert_eq!(cards[1].title, "Police 1");
        assert_eq!(cards[2].sub, vec!["V polici: Police 1".to_string()]);
        assert_eq!(cards[3].sub, vec!["V boxu: Krabice".to_string()]);
    }

    #[test]
    fn test_deleted_entities_drop_out_of_the_queue() {
        let (mut snapshot, shelf) = queue_everything();
        snapshot.cabinets[0].shelves.retain(|s| s.id != shelf);
        let cards = collect_cards(&snapshot);
        // Only the cabinet card survives
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Špajz");
    }

    #[test]
    fn test_sub_lines_cap_at_five() {
        let mut inv = InventoryState::default();
        let cab = inv.create_cabinet("p".into());
        let shelf = inv.cabinet(&cab).unwrap().shelves[0].id.clone();
        for i in 0..8 {
            inv.add_item(&cab, &shelf, &format!("Věc {i}"), None);
        }
        inv.toggle_print_selection(&shelf);
        let cards = collect_cards(&inv.snapshot);
        assert_eq!(cards[0].sub.len(), 5);
    }

    #[test]
    fn test_rendered_sheet_escapes_markup() {
        let (snapshot, _) = queue_everything();
        let html = render_sheet(&collect_cards(&snapshot));
        assert!(html.contains("Mouka &amp; cukr"));
        assert!(html.contains("repeat(3, 1fr)"));
        assert!(!html.contains("Mouka & cukr"));
    }
}
