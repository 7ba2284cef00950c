//! Remote Data State
//!
//! One value per view instead of separate loading / error / data flags.

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(ApiError),
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> Remote<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::Loaded(data),
            Err(err) => Self::Failed(err),
        }
    }

    /// Idle counts as loading: nothing has been shown yet.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Mutate loaded data in place; no-op in any other state.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        if let Self::Loaded(data) = self {
            f(data);
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Remote<U> {
        match self {
            Self::Idle => Remote::Idle,
            Self::Loading => Remote::Loading,
            Self::Loaded(data) => Remote::Loaded(f(data)),
            Self::Failed(err) => Remote::Failed(err),
        }
    }
}

impl<T: Clone + Default> Remote<T> {
    /// Loaded data, or the empty value while loading / after failure.
    pub fn data_or_default(&self) -> T {
        self.data().cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result_leaves_loading() {
        let ok: Remote<Vec<u32>> = Remote::from_result(Ok(vec![1]));
        assert!(!ok.is_loading());
        assert_eq!(ok.data(), Some(&vec![1]));

        let failed: Remote<Vec<u32>> = Remote::from_result(Err(ApiError::NotFound));
        assert!(!failed.is_loading());
        assert_eq!(failed.error(), Some(&ApiError::NotFound));
        assert!(failed.data_or_default().is_empty());
    }

    #[test]
    fn test_update_only_when_loaded() {
        let mut loading: Remote<Vec<u32>> = Remote::Loading;
        loading.update(|v| v.push(1));
        assert_eq!(loading, Remote::Loading);

        let mut loaded = Remote::Loaded(vec![1]);
        loaded.update(|v| v.push(2));
        assert_eq!(loaded.map(|v| v.len()), Remote::Loaded(2));
    }
}
