use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Cs,
    En,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=Cs (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::En,
        _ => Lang::Cs,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::Cs => 0,
            Lang::En => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let cs = lang() == Lang::Cs;
    match key {
        // ── App chrome ──────────────────────────────────────
        "app.title" => if cs { "Domácí organizátor" } else { "Home Organizer" },
        "nav.home" => if cs { "Domů" } else { "Home" },
        "nav.search" => if cs { "Hledat" } else { "Search" },
        "nav.tools" => if cs { "Nástroje" } else { "Tools" },
        "nav.settings" => if cs { "Nastavení" } else { "Settings" },
        "nav.back" => if cs { "Zpět" } else { "Back" },

        // ── Home ────────────────────────────────────────────
        "home.empty" => if cs { "Zatím žádné skříně." } else { "No cabinets yet." },
        "home.empty_hint" => if cs { "Začněte fotkou skříně nebo regálu." } else { "Start with a photo of a cabinet or a shelf unit." },
        "home.add_cabinet" => if cs { "Přidat skříň z fotky..." } else { "Add cabinet from photo..." },
        "home.shelves" => if cs { "polic" } else { "shelves" },
        "home.items" => if cs { "věcí" } else { "items" },

        // ── Cabinet detail ──────────────────────────────────
        "cab.organize" => if cs { "Upravit police" } else { "Edit shelves" },
        "cab.organize_done" => if cs { "Hotovo" } else { "Done" },
        "cab.organize_hint" => if cs { "Podržte polici a táhněte; rohy mění velikost." } else { "Hold a shelf to drag it; corners resize." },
        "cab.add_shelf" => if cs { "Přidat polici" } else { "Add shelf" },
        "cab.change_photo" => if cs { "Vyměnit fotku..." } else { "Replace photo..." },
        "cab.room" => if cs { "Místnost:" } else { "Room:" },
        "cab.room_none" => if cs { "(bez místnosti)" } else { "(no room)" },
        "cab.delete" => if cs { "Smazat skříň" } else { "Delete cabinet" },
        "cab.print_label" => if cs { "Štítek" } else { "Label" },

        // ── Shelf detail ────────────────────────────────────
        "shelf.tab_items" => if cs { "Věci" } else { "Items" },
        "shelf.tab_boxes" => if cs { "Boxy" } else { "Boxes" },
        "shelf.add_item" => if cs { "Přidat" } else { "Add" },
        "shelf.item_placeholder" => if cs { "Nová věc..." } else { "New item..." },
        "shelf.box_placeholder" => if cs { "Nový box..." } else { "New box..." },
        "shelf.no_items" => if cs { "Na polici zatím nic není." } else { "Nothing on this shelf yet." },
        "shelf.no_boxes" => if cs { "Žádné boxy." } else { "No boxes." },
        "shelf.in_box" => if cs { "Box:" } else { "Box:" },
        "shelf.no_box" => if cs { "(volně)" } else { "(loose)" },
        "shelf.photo" => if cs { "Fotka obsahu" } else { "Contents photo" },
        "shelf.set_photo" => if cs { "Vyfotit obsah..." } else { "Photograph contents..." },
        "shelf.delete" => if cs { "Smazat polici" } else { "Delete shelf" },
        "shelf.open_box" => if cs { "Otevřít" } else { "Open" },

        // ── Box detail ──────────────────────────────────────
        "box.empty" => if cs { "Box je prázdný." } else { "The box is empty." },
        "box.take_out" => if cs { "Vyndat" } else { "Take out" },
        "box.scan" => if cs { "Naskenovat obsah..." } else { "Scan contents..." },
        "box.delete" => if cs { "Smazat box" } else { "Delete box" },
        "box.rename" => if cs { "Přejmenovat" } else { "Rename" },

        // ── Search ──────────────────────────────────────────
        "search.placeholder" => if cs { "Co hledáte?" } else { "What are you looking for?" },
        "search.ai" => if cs { "AI hledání" } else { "AI search" },
        "search.ai_tip" => if cs { "Prohledat inventář pomocí AI (volný popis)" } else { "Search the inventory with AI (free-form description)" },
        "search.photo" => if cs { "Hledat fotkou..." } else { "Search by photo..." },
        "search.assistant" => if cs { "Zeptat se asistenta" } else { "Ask the assistant" },
        "search.no_results" => if cs { "Nic nenalezeno." } else { "No results." },
        "search.ai_badge" => if cs { "AI" } else { "AI" },

        // ── Tools ───────────────────────────────────────────
        "tools.labels" => if cs { "Tisk štítků" } else { "Print labels" },
        "tools.labels_desc" => if cs { "Vygenerovat archy štítků z fronty tisku." } else { "Generate label sheets from the print queue." },
        "tools.advisor" => if cs { "Poradce organizace" } else { "Organization advisor" },
        "tools.advisor_desc" => if cs { "Nechat AI zhodnotit rozložení věcí." } else { "Let AI review how things are arranged." },
        "tools.export" => if cs { "Exportovat zálohu..." } else { "Export backup..." },
        "tools.import" => if cs { "Importovat zálohu..." } else { "Import backup..." },
        "tools.import_done" => if cs { "Záloha byla načtena." } else { "Backup imported." },
        "tools.export_done" => if cs { "Záloha byla uložena." } else { "Backup saved." },

        // ── Advisor ─────────────────────────────────────────
        "advisor.run" => if cs { "Analyzovat organizaci" } else { "Analyze organization" },
        "advisor.empty" => if cs { "Zatím žádná analýza." } else { "No analysis yet." },
        "advisor.summary" => if cs { "Shrnutí" } else { "Summary" },
        "advisor.duplicate" => if cs { "Duplicita" } else { "Duplicate" },
        "advisor.warning" => if cs { "Upozornění" } else { "Warning" },
        "advisor.suggestion" => if cs { "Návrh" } else { "Suggestion" },

        // ── Labels ──────────────────────────────────────────
        "labels.empty" => if cs { "Fronta tisku je prázdná. Štítky vybírejte ikonou tiskárny." } else { "The print queue is empty. Queue labels with the printer icon." },
        "labels.clear" => if cs { "Vyprázdnit frontu" } else { "Clear queue" },
        "labels.generate" => if cs { "Uložit arch štítků..." } else { "Save label sheet..." },
        "labels.saved" => if cs { "Arch štítků byl uložen." } else { "Label sheet saved." },

        // ── Settings ────────────────────────────────────────
        "settings.rooms" => if cs { "Místnosti" } else { "Rooms" },
        "settings.room_placeholder" => if cs { "Nová místnost..." } else { "New room..." },
        "settings.tags" => if cs { "Štítky kategorií" } else { "Category tags" },
        "settings.tag_placeholder" => if cs { "Nový štítek..." } else { "New tag..." },
        "settings.add" => if cs { "Přidat" } else { "Add" },
        "settings.gateway" => if cs { "AI služba" } else { "AI service" },
        "settings.endpoint" => if cs { "Adresa API" } else { "API endpoint" },
        "settings.model" => if cs { "Model" } else { "Model" },
        "settings.api_key" => if cs { "API klíč (prázdný = proměnná GEMINI_API_KEY)" } else { "API key (empty = GEMINI_API_KEY variable)" },
        "settings.ui" => if cs { "Rozhraní" } else { "Interface" },
        "settings.font_size" => if cs { "Velikost písma" } else { "Font size" },
        "settings.language" => if cs { "Jazyk" } else { "Language" },

        // ── Confirm dialog ──────────────────────────────────
        "confirm.title" => if cs { "Opravdu smazat?" } else { "Really delete?" },
        "confirm.box_note" => if cs { "Věci z boxu zůstanou na polici." } else { "Items from the box stay on the shelf." },
        "confirm.delete" => if cs { "Smazat" } else { "Delete" },
        "confirm.cancel" => if cs { "Zrušit" } else { "Cancel" },

        // ── Photo editor ────────────────────────────────────
        "editor.title" => if cs { "Oříznout fotku" } else { "Crop photo" },
        "editor.rotate" => if cs { "Otočit" } else { "Rotate" },
        "editor.use" => if cs { "Použít" } else { "Use" },
        "editor.use_and_scan" => if cs { "Použít + AI sken" } else { "Use + AI scan" },
        "editor.use_and_scan_detailed" => if cs { "Použít + podrobný sken" } else { "Use + detailed scan" },
        "editor.scan" => if cs { "AI sken" } else { "AI scan" },
        "editor.scan_detailed" => if cs { "Podrobný AI sken" } else { "Detailed AI scan" },
        "editor.cancel" => if cs { "Zrušit" } else { "Cancel" },

        // ── Status bar / overlays ───────────────────────────
        "status.cabinets" => if cs { "Skříní" } else { "Cabinets" },
        "status.items" => if cs { "Věcí" } else { "Items" },
        "status.ai_busy" => if cs { "AI pracuje..." } else { "AI working..." },
        "status.no_key" => if cs { "AI vypnuto (chybí API klíč)" } else { "AI off (no API key)" },
        "notice.ok" => if cs { "OK" } else { "OK" },

        // ── File dialogs ────────────────────────────────────
        "dialog.pick_photo" => if cs { "Vybrat fotografii" } else { "Pick a photo" },
        "dialog.save_backup" => if cs { "Uložit zálohu" } else { "Save backup" },
        "dialog.open_backup" => if cs { "Otevřít zálohu" } else { "Open backup" },
        "dialog.save_labels" => if cs { "Uložit arch štítků" } else { "Save label sheet" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}
