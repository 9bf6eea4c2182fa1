//! Loading State
//!
//! Read models for the fetch lifecycle and the list area.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

impl LoadingState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadingState::Ready)
    }
}

/// What the list area should render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Failed(String),
    /// Loaded, but nothing matches the search term
    Empty,
    Populated(usize),
}

impl ListStatus {
    pub fn from_parts(state: &LoadingState, displayed_len: usize) -> Self {
        match state {
            LoadingState::Loading => ListStatus::Loading,
            LoadingState::Failed(message) => ListStatus::Failed(message.clone()),
            LoadingState::Ready if displayed_len == 0 => ListStatus::Empty,
            LoadingState::Ready => ListStatus::Populated(displayed_len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_status_is_distinct_per_state() {
        assert_eq!(ListStatus::from_parts(&LoadingState::Loading, 0), ListStatus::Loading);
        assert_eq!(
            ListStatus::from_parts(&LoadingState::Failed("boom".into()), 0),
            ListStatus::Failed("boom".into())
        );
        assert_eq!(ListStatus::from_parts(&LoadingState::Ready, 0), ListStatus::Empty);
        assert_eq!(ListStatus::from_parts(&LoadingState::Ready, 3), ListStatus::Populated(3));
    }
}
