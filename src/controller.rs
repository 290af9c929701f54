//! Generator List Controller
//!
//! Owns the displayed generator list, loads it once from the listing
//! service and prepends items reported by the creation form.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;

use crate::api::ListingService;
use crate::error::SubmissionError;
use crate::models::{GeneratorItem, ItemId};

/// Token for one listing request. Only the newest one may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct FetchGeneration(u64);

/// Ordered generator list plus the bookkeeping that keeps a late fetch
/// from erasing local creations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorList {
    items: Vec<GeneratorItem>,
    generation: FetchGeneration,
    in_flight: Option<FetchGeneration>,
    /// Local creations made while a fetch is in flight, newest first
    unconfirmed: Vec<GeneratorItem>,
}

impl GeneratorList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[GeneratorItem] {
        &self.items
    }

    /// Start a new listing request, superseding any in flight
    pub fn begin_fetch(&mut self) -> FetchGeneration {
        self.generation = FetchGeneration(self.generation.0 + 1);
        self.in_flight = Some(self.generation);
        self.generation
    }

    /// Replace the list with a server result, keeping unconfirmed local
    /// creations in front. Returns false for a superseded generation.
    pub fn apply_fetch(&mut self, generation: FetchGeneration, server: Vec<GeneratorItem>) -> bool {
        if self.in_flight != Some(generation) {
            return false;
        }
        self.in_flight = None;
        self.unconfirmed
            .retain(|local| !server.iter().any(|remote| remote.item_id == local.item_id));
        self.items = self.unconfirmed.drain(..).chain(server).collect();
        true
    }

    /// Close a failed request without touching the items
    pub fn abandon_fetch(&mut self, generation: FetchGeneration) {
        if self.in_flight == Some(generation) {
            self.in_flight = None;
        }
    }

    pub fn prepend(&mut self, item: GeneratorItem) {
        if self.in_flight.is_some() {
            self.unconfirmed.insert(0, item.clone());
        }
        self.items.insert(0, item);
    }
}

#[cfg(test)]
impl GeneratorList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn keys(&self) -> Vec<ItemId> {
        self.items.iter().map(item_key).collect()
    }

    pub fn in_flight(&self) -> Option<FetchGeneration> {
        self.in_flight
    }
}

/// List identity key used by the rendered `For`
pub fn item_key(item: &GeneratorItem) -> ItemId {
    item.item_id.clone()
}

/// Where swallowed errors are reported
pub trait DiagnosticSink {
    fn report(&self, context: &str, error: &dyn std::error::Error);
}

/// Reports through the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, context: &str, error: &dyn std::error::Error) {
        log::error!("{}: {}", context, error);
    }
}

/// Bridges the listing service, the creation form and the rendered list
pub struct ListController<S, D = LogSink> {
    state: ArcRwSignal<GeneratorList>,
    service: Arc<S>,
    sink: Arc<D>,
    activated: Arc<AtomicBool>,
    alive: Arc<AtomicBool>,
}

impl<S, D> Clone for ListController<S, D> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            service: Arc::clone(&self.service),
            sink: Arc::clone(&self.sink),
            activated: Arc::clone(&self.activated),
            alive: Arc::clone(&self.alive),
        }
    }
}

impl<S, D> ListController<S, D>
where
    S: ListingService,
    D: DiagnosticSink,
{
    pub fn new(service: S, sink: D) -> Self {
        Self {
            state: ArcRwSignal::new(GeneratorList::new()),
            service: Arc::new(service),
            sink: Arc::new(sink),
            activated: Arc::new(AtomicBool::new(false)),
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Reactive handle for rendering
    pub fn state(&self) -> ArcRwSignal<GeneratorList> {
        self.state.clone()
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Load the list from the listing service. Only the first call fetches.
    pub async fn on_activate(&self) {
        if self.activated.swap(true, Ordering::SeqCst) {
            log::debug!("already activated, skipping fetch");
            return;
        }
        let Some(generation) = self.state.try_update(GeneratorList::begin_fetch) else {
            return;
        };

        let result = self.service.list_generators().await;

        if !self.is_alive() {
            log::debug!("discarding listing response after teardown");
            return;
        }
        match result {
            Ok(items) => {
                let count = items.len();
                match self.state.try_update(|list| list.apply_fetch(generation, items)) {
                    Some(true) => log::info!("loaded {} generators", count),
                    _ => log::debug!("discarding superseded listing {:?}", generation),
                }
            }
            Err(err) => {
                self.state.try_update(|list| list.abandon_fetch(generation));
                self.sink.report("Error in the API", &err);
            }
        }
    }

    pub fn on_item_created(&self, item: GeneratorItem) {
        if !self.is_alive() {
            return;
        }
        log::debug!("prepending created item {}", item.item_id);
        self.state.try_update(|list| list.prepend(item));
    }

    pub fn on_creation_failed(&self, error: &SubmissionError) {
        self.sink.report("error", error);
    }

    /// Teardown: later responses are dropped
    pub fn deactivate(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
impl<S, D> ListController<S, D> {
    pub fn items(&self) -> Vec<GeneratorItem> {
        self.state.with_untracked(|list| list.items().to_vec())
    }

    pub fn keys(&self) -> Vec<ItemId> {
        self.state.with_untracked(GeneratorList::keys)
    }
}
