//! History engine domain: entries, the ordered store, selection tracking,
//! search visibility, previews and the derived view model.

mod entry;
mod error;
pub mod preview;
mod search;
mod selection;
mod store;
pub mod view;

pub use entry::Entry;
pub use error::HistoryError;
pub use search::SearchFilter;
pub use selection::{Direction, NavigationStep, SelectionState, SelectionTracker};
pub use store::HistoryStore;
pub use view::{HistoryView, HistoryViewRow, TopbarView};
