//! Directory View Core
//!
//! Framework-free state for the user directory: the fetched base collection,
//! search and sort trackers, the composer that derives the displayed list,
//! and the list/detail selection.

mod collection;
mod compose;
mod error;
mod loading;
mod record;
mod search;
mod selection;
mod sort;

pub use collection::BaseCollection;
pub use compose::compose;
pub use error::FetchError;
pub use loading::{ListStatus, LoadingState};
pub use record::{Address, Company, Geo, Record};
pub use search::{matches, SearchTermTracker};
pub use selection::{Selection, SelectionController};
pub use sort::{SortDirection, SortKey, SortSpec, SortSpecTracker};
