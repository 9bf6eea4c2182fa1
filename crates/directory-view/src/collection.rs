//! Base Collection
//!
//! Write-once holder for the fetched records.

use crate::error::FetchError;
use crate::loading::LoadingState;
use crate::record::Record;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseCollection {
    records: Vec<Record>,
    state: LoadingState,
}

impl BaseCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn state(&self) -> &LoadingState {
        &self.state
    }

    /// Apply the fetch result. Only the first call while loading has effect.
    ///
    /// Returns whether the result was applied.
    pub fn apply_fetch(&mut self, result: Result<Vec<Record>, FetchError>) -> bool {
        if self.state != LoadingState::Loading {
            tracing::warn!("[COLLECTION] fetch result ignored, already {:?}", self.state);
            return false;
        }
        match result {
            Ok(records) => {
                tracing::info!("[COLLECTION] loaded {} users", records.len());
                self.records = records;
                self.state = LoadingState::Ready;
            }
            Err(e) => {
                tracing::error!("[COLLECTION] {}", e);
                self.state = LoadingState::Failed(e.to_string());
            }
        }
        true
    }

    pub fn contains(&self, record: &Record) -> bool {
        self.records.iter().any(|r| r == record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::make_record;

    #[test]
    fn test_success_is_write_once() {
        let mut base = BaseCollection::new();
        assert_eq!(base.state(), &LoadingState::Loading);

        assert!(base.apply_fetch(Ok(vec![make_record(1, "Leanne Graham", "Sincere@april.biz")])));
        assert_eq!(base.state(), &LoadingState::Ready);
        assert_eq!(base.records().len(), 1);

        assert!(!base.apply_fetch(Ok(Vec::new())));
        assert!(!base.apply_fetch(Err(FetchError::Status { status: 500 })));
        assert_eq!(base.state(), &LoadingState::Ready);
        assert_eq!(base.records().len(), 1);
    }

    #[test]
    fn test_failure_is_terminal() {
        let mut base = BaseCollection::new();
        assert!(base.apply_fetch(Err(FetchError::Status { status: 404 })));
        assert_eq!(
            base.state(),
            &LoadingState::Failed("Failed to fetch users (HTTP 404)".to_string())
        );
        assert!(base.records().is_empty());

        assert!(!base.apply_fetch(Ok(vec![make_record(1, "Leanne Graham", "Sincere@april.biz")])));
        assert!(base.records().is_empty());
    }

    #[test]
    fn test_contains() {
        let leanne = make_record(1, "Leanne Graham", "Sincere@april.biz");
        let mut base = BaseCollection::new();
        base.apply_fetch(Ok(vec![leanne.clone()]));

        assert!(base.contains(&leanne));
        assert!(!base.contains(&make_record(99, "Nobody", "no@where.io")));
    }
}
