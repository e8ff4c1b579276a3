/// Core functionality modules
///
/// Contains the search logic: suggestion matching, query history,
/// keyboard highlighting, and the controller tying them to the store.

pub mod controller;
pub mod cursor;
pub mod history;
pub mod matcher;

pub use controller::{
    Activation, Notification, PanelState, SearchController, SearchOutcome, SuggestionGroup,
    HISTORY_KEY,
};
pub use cursor::Cursor;
pub use history::{QueryHistory, MAX_HISTORY};
pub use matcher::{
    CategoryGroup, GroupedMatches, MatchSet, Matcher, Suggestions, MAX_SUGGESTIONS,
    MIN_QUERY_CHARS,
};
