//! UI Components
//!
//! Presentational Leptos components. State lives in the store;
//! these only render read models and report user input.

mod search_bar;
mod sort_controls;
mod user_table;
mod user_details;

pub use search_bar::SearchBar;
pub use sort_controls::SortControls;
pub use user_table::UserTable;
pub use user_details::UserDetails;
