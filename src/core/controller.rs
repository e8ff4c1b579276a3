/// Search controller
///
/// The one object the UI talks to. It owns the catalog, the query history
/// and the store the history is written to, and turns input, focus and
/// submit events into panel states and search outcomes.

use crate::catalog::{Catalog, CatalogEntry, Target};
use crate::core::cursor::Cursor;
use crate::core::history::QueryHistory;
use crate::core::matcher::{GroupedMatches, Matcher, Suggestions, MIN_QUERY_CHARS};
use crate::db::Database;
use crate::error::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Store key holding the history JSON array
pub const HISTORY_KEY: &str = "searchHistory";

/// Matches of one category, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionGroup {
    pub category: String,
    pub entries: Vec<CatalogEntry>,
}

/// What the suggestion panel should show
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    Hidden,
    /// Recent searches, most recent first
    History(Vec<String>),
    /// Query accepted but nothing matched
    NoResults { query: String },
    Suggestions(Vec<SuggestionGroup>),
}

impl PanelState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, PanelState::Hidden)
    }

    /// Number of selectable rows
    pub fn row_count(&self) -> usize {
        match self {
            PanelState::Hidden | PanelState::NoResults { .. } => 0,
            PanelState::History(queries) => queries.len(),
            PanelState::Suggestions(groups) => groups.iter().map(|g| g.entries.len()).sum(),
        }
    }
}

impl From<GroupedMatches<'_>> for PanelState {
    fn from(grouped: GroupedMatches<'_>) -> Self {
        let groups = grouped
            .iter()
            .map(|group| SuggestionGroup {
                category: group.category.to_string(),
                entries: group.entries.iter().map(|&entry| entry.clone()).collect(),
            })
            .collect();

        PanelState::Suggestions(groups)
    }
}

/// Informational message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of submitting a query
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The query named an entry exactly
    Navigate { entry: CatalogEntry, target: Target },
    /// No exact match; tell the user we're searching
    Unresolved { query: String, notification: Notification },
    /// Blank query, nothing happened
    Ignored,
}

/// Result of choosing a panel row or pressing Enter
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    /// A suggestion was chosen
    Navigate { entry: CatalogEntry, target: Target },
    /// A recent search was chosen; the panel now shows its suggestions
    Recall { query: String },
    /// Nothing highlighted, the typed query was submitted
    Submitted(SearchOutcome),
}

pub struct SearchController {
    catalog: Catalog,
    db: Arc<Database>,
    history: QueryHistory,
    panel: PanelState,
    cursor: Cursor,
    query: String,
}

impl SearchController {
    /// Create a controller, restoring history from the store
    ///
    /// Missing, corrupt or unreadable history starts out empty.
    pub async fn open(catalog: Catalog, db: Arc<Database>) -> Self {
        let raw = match db.get_value(HISTORY_KEY).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Could not read search history");
                None
            }
        };

        let history = QueryHistory::from_json(raw.as_deref());
        debug!(entries = history.len(), catalog = catalog.len(), "Search controller ready");

        Self {
            catalog,
            db,
            history,
            panel: PanelState::Hidden,
            cursor: Cursor::new(),
            query: String::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &QueryHistory {
        &self.history
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    /// Current contents of the search box
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.cursor.current()
    }

    /// Recompute suggestions for what's typed
    pub fn on_input(&mut self, query: &str) -> &PanelState {
        self.query = query.to_string();

        let panel = match Matcher::suggest(query, self.catalog.entries()) {
            Suggestions::Hidden => PanelState::Hidden,
            Suggestions::Matches(set) if set.is_empty() => PanelState::NoResults { query: set.query },
            Suggestions::Matches(set) => PanelState::from(set.grouped()),
        };

        self.show(panel)
    }

    /// Search box gained focus: short input shows recent searches
    pub fn on_focus(&mut self, query: &str) -> &PanelState {
        if query.trim().chars().count() >= MIN_QUERY_CHARS {
            return self.on_input(query);
        }

        self.query = query.to_string();
        let panel = if self.history.is_empty() {
            PanelState::Hidden
        } else {
            PanelState::History(self.history.entries().to_vec())
        };

        self.show(panel)
    }

    /// Escape or a click elsewhere
    pub fn dismiss(&mut self) {
        self.show(PanelState::Hidden);
    }

    pub fn highlight_next(&mut self) -> Option<usize> {
        self.cursor.next(self.panel.row_count())
    }

    pub fn highlight_previous(&mut self) -> Option<usize> {
        self.cursor.previous(self.panel.row_count())
    }

    /// Pointer moved over a row
    pub fn hover(&mut self, index: usize) {
        self.cursor.set(index, self.panel.row_count());
    }

    /// Choose a visible row
    ///
    /// Returns `None` when `index` is not a selectable row.
    pub fn select(&mut self, index: usize) -> Option<Activation> {
        match &self.panel {
            PanelState::Suggestions(groups) => {
                let entry = groups
                    .iter()
                    .flat_map(|group| group.entries.iter())
                    .nth(index)?
                    .clone();

                self.query = entry.name.clone();
                self.show(PanelState::Hidden);
                info!(name = %entry.name, target = %entry.target, "Suggestion chosen");

                let target = entry.target.clone();
                Some(Activation::Navigate { entry, target })
            }
            PanelState::History(queries) => {
                let query = queries.get(index)?.clone();
                self.on_input(&query);
                Some(Activation::Recall { query })
            }
            PanelState::Hidden | PanelState::NoResults { .. } => None,
        }
    }

    /// Enter: choose the highlighted row, or submit the typed query
    pub async fn activate(&mut self) -> Activation {
        if let Some(activation) = self.cursor.current().and_then(|index| self.select(index)) {
            return activation;
        }

        let query = self.query.clone();
        Activation::Submitted(self.perform_search(&query).await)
    }

    /// Submit a query
    ///
    /// Exact (case-insensitive) name matches navigate; anything else is
    /// unresolved. Every non-blank query is recorded in history either way.
    pub async fn perform_search(&mut self, query: &str) -> SearchOutcome {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return SearchOutcome::Ignored;
        }

        let outcome = match Matcher::find_exact(trimmed, self.catalog.entries()) {
            Some(entry) => {
                info!(query = trimmed, target = %entry.target, "Exact match");
                SearchOutcome::Navigate {
                    entry: entry.clone(),
                    target: entry.target.clone(),
                }
            }
            None => {
                info!(query = trimmed, "No exact match");
                SearchOutcome::Unresolved {
                    query: trimmed.to_string(),
                    notification: Notification {
                        message: format!("Searching for: {}", trimmed),
                    },
                }
            }
        };

        self.show(PanelState::Hidden);

        if self.history.record(trimmed) {
            self.persist_history().await;
        }

        outcome
    }

    /// Forget all recent searches
    ///
    /// The stored key goes first; on failure the in-memory history is kept.
    pub async fn clear_history(&mut self) -> Result<()> {
        self.db.remove_value(HISTORY_KEY).await?;
        self.history.clear();

        if matches!(self.panel, PanelState::History(_)) {
            self.show(PanelState::Hidden);
        }

        Ok(())
    }

    fn show(&mut self, panel: PanelState) -> &PanelState {
        self.cursor.reset();
        self.panel = panel;
        &self.panel
    }

    // The in-memory history stays authoritative when the write fails.
    async fn persist_history(&self) {
        if let Err(e) = self.db.set_value(HISTORY_KEY, &self.history.to_json()).await {
            warn!(error = %e, "Could not save search history");
        }
    }
}
