use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::config::Config;
use crate::graph::memory::InMemoryGraph;
use crate::graph::store::GraphStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable graph backend. Default: InMemoryGraph.
    pub graph: Arc<dyn GraphStore>,
}

impl AppState {
    pub fn new(config: Config, graph: Arc<dyn GraphStore>) -> Self {
        Self { config, graph }
    }

    /// State backed by a fresh in-memory graph.
    pub fn in_memory(config: Config) -> Self {
        Self::new(config, Arc::new(InMemoryGraph::new()))
    }

    /// The evaluation date used in place of missing or unparseable dates.
    pub fn today(&self) -> NaiveDate {
        self.config
            .evaluation_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}
