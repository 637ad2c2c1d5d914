//! UI-side state of the AI gateway: one in-flight request at a time,
//! results applied on the UI thread during `poll`.
//!
//! Every request carries the epoch current at launch time; navigation bumps
//! the epoch, so a reply that lands after the user has moved on only clears
//! the busy flag and its payload is dropped.

use std::sync::mpsc::{channel, Receiver, Sender};

use shared::AdvisorReport;

use crate::gateway::GatewayEvent;

use super::inventory::{InventoryState, SearchMatch};

pub struct AssistantState {
    tx: Sender<GatewayEvent>,
    rx: Receiver<GatewayEvent>,
    epoch: u64,
    /// One request at a time; AI buttons disable while set
    pub busy: bool,
    /// Current search box content
    pub query: String,
    /// Merged local + AI search results
    pub results: Vec<SearchMatch>,
    /// Last assistant answer, shown above the results
    pub answer: Option<String>,
    pub advisor: Option<AdvisorReport>,
    /// One-line status/error banner; cleared by the next request
    pub notice: Option<String>,
}

impl AssistantState {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            epoch: 0,
            busy: false,
            query: String::new(),
            results: Vec::new(),
            answer: None,
            advisor: None,
            notice: None,
        }
    }

    /// Sender end handed to the gateway client at startup
    pub fn sender(&self) -> Sender<GatewayEvent> {
        self.tx.clone()
    }

    /// Mark a request as launched and return the epoch to stamp it with
    pub fn begin_request(&mut self) -> u64 {
        self.busy = true;
        self.notice = None;
        self.epoch
    }

    /// Invalidate all in-flight requests (called when the view changes)
    pub fn invalidate(&mut self) {
        self.epoch += 1;
    }

    /// Recompute local search results for the current query, dropping any
    /// previous AI hits.
    pub fn refresh_local(&mut self, inventory: &InventoryState) {
        self.results = inventory.search(&self.query);
    }

    /// Drain the event channel and apply fresh results. Returns true when
    /// anything arrived, so the frame can request a repaint.
    pub fn poll(&mut self, inventory: &mut InventoryState) -> bool {
        let mut received = false;
        while let Ok(event) = self.rx.try_recv() {
            received = true;
            self.busy = false;
            if self.event_epoch(&event) != self.epoch {
                tracing::debug!("dropping stale gateway reply");
                continue;
            }
            self.apply(event, inventory);
        }
        received
    }

    fn event_epoch(&self, event: &GatewayEvent) -> u64 {
        match event {
            GatewayEvent::ShelfScan { epoch, .. }
            | GatewayEvent::VisualSearch { epoch, .. }
            | GatewayEvent::AiSearch { epoch, .. }
            | GatewayEvent::Assistant { epoch, .. }
            | GatewayEvent::Advisor { epoch, .. } => *epoch,
        }
    }

    fn apply(&mut self, event: GatewayEvent, inventory: &mut InventoryState) {
        match event {
            GatewayEvent::ShelfScan { cabinet_id, shelf_id, box_id, result, .. } => match result {
                Ok(scan) => {
                    let added = inventory.add_scanned_items(
                        &cabinet_id,
                        &shelf_id,
                        box_id.as_deref(),
                        &scan.items,
                    );
                    self.notice = Some(if added == 0 {
                        "AI na fotce nic nerozpoznala.".into()
                    } else {
                        format!("AI přidala {added} položek.")
                    });
                }
                Err(e) => self.notice = Some(e),
            },
            GatewayEvent::VisualSearch { result, .. } => match result {
                Ok(m) => {
                    let located = m.item_id.as_deref().and_then(|id| inventory.locate(id));
                    match located {
                        Some(path) => {
                            self.query = m.item_name.clone();
                            self.results = vec![SearchMatch {
                                item_id: m.item_id.unwrap_or_default(),
                                item_name: m.item_name,
                                reason: m.reason,
                                path,
                                is_ai: true,
                            }];
                        }
                        None => {
                            self.notice = Some(if m.reason.is_empty() {
                                "Předmět se v inventáři nepodařilo najít.".into()
                            } else {
                                m.reason
                            });
                        }
                    }
                }
                Err(e) => self.notice = Some(e),
            },
            GatewayEvent::AiSearch { result, .. } => match result {
                Ok(hits) => {
                    for hit in hits {
                        if self.results.iter().any(|r| r.item_id == hit.item_id) {
                            continue;
                        }
                        // Hits pointing at deleted items are dropped
                        if let Some(path) = inventory.locate(&hit.item_id) {
                            self.results.push(SearchMatch {
                                item_id: hit.item_id,
                                item_name: hit.item_name,
                                reason: hit.reason,
                                path,
                                is_ai: true,
                            });
                        }
                    }
                }
                Err(e) => self.notice = Some(e),
            },
            GatewayEvent::Assistant { result, .. } => match result {
                Ok(reply) => {
                    self.answer = Some(reply.answer);
                    if let Some(id) = reply.found_item_id {
                        if let Some(path) = inventory.locate(&id) {
                            if !self.results.iter().any(|r| r.item_id == id) {
                                let name = inventory
                                    .shelf(&path.cabinet_id, &path.shelf_id)
                                    .and_then(|s| s.items.iter().find(|i| i.id == id))
                                    .map(|i| i.name.clone())
                                    .unwrap_or_default();
                                self.results.push(SearchMatch {
                                    item_id: id,
                                    item_name: name,
                                    reason: "Zmíněno asistentem".into(),
                                    path,
                                    is_ai: true,
                                });
                            }
                        }
                    }
                }
                Err(e) => self.notice = Some(e),
            },
            GatewayEvent::Advisor { result, .. } => match result {
                Ok(report) => self.advisor = Some(report),
                Err(e) => self.notice = Some(e),
            },
        }
    }
}
