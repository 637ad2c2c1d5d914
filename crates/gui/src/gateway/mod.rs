//! AI gateway: every model call the app makes goes through here.
//!
//! Requests run on a small tokio runtime owned by the client; results come
//! back to the UI thread over an mpsc channel as [`GatewayEvent`]s, each
//! stamped with the request epoch so stale replies can be dropped.
//!
//! Model output is parsed tolerantly: a malformed reply degrades to an
//! empty result, never an error dialog with raw JSON in it.

use std::sync::mpsc::Sender;

use shared::{
    AdvisorReport, AiSearchHit, AssistantReply, FlatEntry, ObjectId, ScanMode, ScannedItem,
    ShelfScan, VisualMatch,
};

use crate::state::settings::GatewaySettings;

// ── Prompts ─────────────────────────────────────────────────────

const SCAN_GENERAL_PROMPT: &str = "Analyzuj fotografii obsahu police. Vyjmenuj hlavní viditelné \
předměty nebo skupiny předmětů (např. krabice s nářadím, sklenice s marmeládou). Ke každému \
přidej krátký štítek kategorie. Odpověz pouze JSON objektem tvaru \
{\"items\": [{\"name\": \"...\", \"tag\": \"...\"}]}.";

const SCAN_DETAILED_PROMPT: &str = "Analyzuj fotografii obsahu police velmi podrobně. Vyjmenuj \
každý jednotlivý rozpoznatelný předmět zvlášť, včetně malých věcí. Ke každému přidej krátký \
štítek kategorie. Odpověz pouze JSON objektem tvaru \
{\"items\": [{\"name\": \"...\", \"tag\": \"...\"}]}.";

const VISUAL_SEARCH_PROMPT: &str = "Na fotografii je jeden předmět. Najdi ho v přiloženém \
inventáři (JSON seznam položek s umístěním). Odpověz pouze JSON objektem tvaru \
{\"itemId\": \"...\", \"itemName\": \"...\", \"confidence\": 0.0, \"reason\": \"...\"}; pokud \
předmět v inventáři není, nastav itemId na null a do reason napiš proč.";

const AI_SEARCH_PROMPT: &str = "Prohledej inventář (JSON seznam položek s umístěním) podle \
dotazu uživatele. Dotaz může být volný popis, ne přesný název. Odpověz pouze JSON polem \
[{\"itemId\": \"...\", \"itemName\": \"...\", \"reason\": \"...\"}] seřazeným podle relevance; \
prázdné pole, pokud nic neodpovídá.";

const ASSISTANT_PROMPT: &str = "Jsi asistent domácí organizace. Odpovídej česky, stručně a \
prakticky. K dispozici máš inventář uživatele (JSON seznam položek s umístěním). Odpověz pouze \
JSON objektem tvaru {\"answer\": \"...\", \"foundItemId\": \"...\"}; foundItemId vyplň jen \
tehdy, když se odpověď týká jedné konkrétní položky inventáře.";

const ADVISOR_PROMPT: &str = "Zhodnoť organizaci domácího skladování podle přiloženého rozpisu \
skříní, polic a předmětů (JSON). Hledej duplicity, nelogická umístění a příležitosti ke \
zlepšení. Odpověz pouze JSON objektem tvaru {\"findings\": [{\"type\": \
\"duplicate|warning|suggestion\", \"title\": \"...\", \"description\": \"...\", \"items\": \
[\"...\"]}], \"summary\": \"...\"} s texty v češtině.";

// ── Events ──────────────────────────────────────────────────────

/// A finished gateway request, delivered back to the UI thread
#[derive(Debug)]
pub enum GatewayEvent {
    ShelfScan {
        epoch: u64,
        cabinet_id: ObjectId,
        shelf_id: ObjectId,
        box_id: Option<ObjectId>,
        result: Result<ShelfScan, String>,
    },
    VisualSearch {
        epoch: u64,
        result: Result<VisualMatch, String>,
    },
    AiSearch {
        epoch: u64,
        result: Result<Vec<AiSearchHit>, String>,
    },
    Assistant {
        epoch: u64,
        result: Result<AssistantReply, String>,
    },
    Advisor {
        epoch: u64,
        result: Result<AdvisorReport, String>,
    },
}

/// Connection parameters snapshotted per request, so edits to the settings
/// mid-flight cannot tear a running call.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub endpoint: String,
    pub model: String,
    pub key: String,
}

impl GatewayConfig {
    /// `None` when no API key is available: AI features stay disabled
    pub fn from_settings(settings: &GatewaySettings) -> Option<Self> {
        Some(Self {
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            key: settings.resolved_key()?,
        })
    }
}

// ── Client ──────────────────────────────────────────────────────

pub struct GatewayClient {
    runtime: tokio::runtime::Runtime,
    http: reqwest::Client,
    tx: Sender<GatewayEvent>,
}

impl GatewayClient {
    pub fn new(tx: Sender<GatewayEvent>) -> Result<Self, String> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(|e| format!("failed to start gateway runtime: {e}"))?;
        Ok(Self { runtime, http: reqwest::Client::new(), tx })
    }

    /// Recognize items on a shelf (or box) photo
    pub fn scan_shelf(
        &self,
        config: GatewayConfig,
        epoch: u64,
        cabinet_id: ObjectId,
        shelf_id: ObjectId,
        box_id: Option<ObjectId>,
        jpeg_base64: String,
        mode: ScanMode,
    ) {
        let http = self.http.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let prompt = match mode {
                ScanMode::General => SCAN_GENERAL_PROMPT,
                ScanMode::Detailed => SCAN_DETAILED_PROMPT,
            };
            let parts = vec![text_part(prompt), image_part(&jpeg_base64)];
            let result = generate(&http, &config, parts).await.map(|text| parse_shelf_scan(&text));
            let _ = tx.send(GatewayEvent::ShelfScan { epoch, cabinet_id, shelf_id, box_id, result });
        });
    }

    /// Find a photographed object in the inventory
    pub fn search_by_image(
        &self,
        config: GatewayConfig,
        epoch: u64,
        jpeg_base64: String,
        inventory: Vec<FlatEntry>,
    ) {
        let http = self.http.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let parts = vec![
                text_part(VISUAL_SEARCH_PROMPT),
                text_part(&inventory_json(&inventory)),
                image_part(&jpeg_base64),
            ];
            let result =
                generate(&http, &config, parts).await.map(|text| parse_visual_match(&text));
            let _ = tx.send(GatewayEvent::VisualSearch { epoch, result });
        });
    }

    /// Natural-language search over the inventory
    pub fn ai_search(
        &self,
        config: GatewayConfig,
        epoch: u64,
        query: String,
        inventory: Vec<FlatEntry>,
    ) {
        let http = self.http.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let parts = vec![
                text_part(AI_SEARCH_PROMPT),
                text_part(&inventory_json(&inventory)),
                text_part(&format!("Dotaz: {query}")),
            ];
            let result = generate(&http, &config, parts).await.map(|text| parse_search_hits(&text));
            let _ = tx.send(GatewayEvent::AiSearch { epoch, result });
        });
    }

    /// Free-form question about the inventory, optionally with a photo
    pub fn ask_assistant(
        &self,
        config: GatewayConfig,
        epoch: u64,
        query: String,
        jpeg_base64: Option<String>,
        inventory: Vec<FlatEntry>,
    ) {
        let http = self.http.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let mut parts = vec![
                text_part(ASSISTANT_PROMPT),
                text_part(&inventory_json(&inventory)),
                text_part(&format!("Otázka: {query}")),
            ];
            if let Some(b64) = &jpeg_base64 {
                parts.push(image_part(b64));
            }
            let result =
                generate(&http, &config, parts).await.map(|text| parse_assistant_reply(&text));
            let _ = tx.send(GatewayEvent::Assistant { epoch, result });
        });
    }

    /// Whole-inventory organization review
    pub fn analyze_organization(
        &self,
        config: GatewayConfig,
        epoch: u64,
        layout: serde_json::Value,
    ) {
        let http = self.http.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let parts = vec![text_part(ADVISOR_PROMPT), text_part(&layout.to_string())];
            let result =
                generate(&http, &config, parts).await.map(|text| parse_advisor_report(&text));
            let _ = tx.send(GatewayEvent::Advisor { epoch, result });
        });
    }
}

// ── Wire plumbing ───────────────────────────────────────────────

fn text_part(text: &str) -> serde_json::Value {
    serde_json::json!({ "text": text })
}

fn image_part(jpeg_base64: &str) -> serde_json::Value {
    serde_json::json!({
        "inline_data": { "mime_type": "image/jpeg", "data": jpeg_base64 }
    })
}

fn inventory_json(inventory: &[FlatEntry]) -> String {
    serde_json::to_string(inventory).unwrap_or_else(|_| "[]".into())
}

/// POST one generateContent request and pull the reply text out of the
/// candidate envelope.
async fn generate(
    http: &reqwest::Client,
    config: &GatewayConfig,
    parts: Vec<serde_json::Value>,
) -> Result<String, String> {
    let url = format!(
        "{}/models/{}:generateContent?key={}",
        config.endpoint, config.model, config.key
    );
    let body = serde_json::json!({
        "contents": [{ "parts": parts }],
        "generationConfig": { "responseMimeType": "application/json" }
    });

    let response = http
        .post(&url)
        .json(&body)
        .send()
        .await
        .map_err(|e| format!("AI požadavek selhal: {e}"))?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("AI požadavek selhal: HTTP {status}"));
    }

    let envelope: serde_json::Value =
        response.json().await.map_err(|e| format!("AI odpověď nelze přečíst: {e}"))?;

    let text = envelope["candidates"]
        .as_array()
        .and_then(|arr| arr.first())
        .and_then(|c| c["content"]["parts"].as_array())
        .and_then(|parts| parts.first())
        .and_then(|p| p["text"].as_str())
        .unwrap_or("{}");
    Ok(text.to_string())
}

// ── Tolerant reply parsing ──────────────────────────────────────

pub fn parse_shelf_scan(text: &str) -> ShelfScan {
    if let Ok(scan) = serde_json::from_str::<ShelfScan>(text) {
        return scan;
    }
    // Some replies come as a bare item array
    match serde_json::from_str::<Vec<ScannedItem>>(text) {
        Ok(items) => ShelfScan { items },
        Err(_) => ShelfScan::default(),
    }
}

pub fn parse_visual_match(text: &str) -> VisualMatch {
    serde_json::from_str(text).unwrap_or_default()
}

pub fn parse_search_hits(text: &str) -> Vec<AiSearchHit> {
    if let Ok(hits) = serde_json::from_str::<Vec<AiSearchHit>>(text) {
        return hits;
    }
    let value: serde_json::Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(_) => return Vec::new(),
    };
    ["matches", "results", "items"]
        .iter()
        .find_map(|key| {
            value.get(*key).and_then(|v| serde_json::from_value::<Vec<AiSearchHit>>(v.clone()).ok())
        })
        .unwrap_or_default()
}

/// Falls back to treating the whole reply as the answer text
pub fn parse_assistant_reply(text: &str) -> AssistantReply {
    serde_json::from_str(text).unwrap_or_else(|_| AssistantReply {
        answer: text.trim().to_string(),
        ..AssistantReply::default()
    })
}

pub fn parse_advisor_report(text: &str) -> AdvisorReport {
    serde_json::from_str(text).unwrap_or_default()
}
