//! Tagged fetch result.

/// Outcome of a fetch that ran to completion.
///
/// There are exactly two variants. A fetch that was cancelled by its owning
/// scope never produces a `FetchResult`; it surfaces as
/// [`Cancelled`](super::error::Cancelled) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult<T> {
    Success(T),
    /// The call failed. Which kind of failure is logged where it is
    /// classified and not carried past the use case.
    Failure,
}

impl<T> FetchResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FetchResult::Failure)
    }

    pub fn success(self) -> Option<T> {
        match self {
            FetchResult::Success(value) => Some(value),
            FetchResult::Failure => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchResult<U> {
        match self {
            FetchResult::Success(value) => FetchResult::Success(f(value)),
            FetchResult::Failure => FetchResult::Failure,
        }
    }
}

impl<T, E> From<Result<T, E>> for FetchResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => FetchResult::Success(value),
            Err(_) => FetchResult::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_failure() {
        let failed: FetchResult<u32> = FetchResult::Failure;
        assert_eq!(failed.map(|n| n + 1), FetchResult::Failure);
        assert_eq!(FetchResult::Success(1).map(|n| n + 1), FetchResult::Success(2));
    }

    #[test]
    fn test_from_result_collapses_error() {
        let ok: Result<&str, String> = Ok("x");
        let err: Result<&str, String> = Err("boom".to_string());
        assert_eq!(FetchResult::from(ok), FetchResult::Success("x"));
        assert!(FetchResult::from(err).is_failure());
    }

    #[test]
    fn test_success_accessor() {
        assert_eq!(FetchResult::Success(vec![1]).success(), Some(vec![1]));
        assert_eq!(FetchResult::<Vec<u8>>::Failure.success(), None);
    }
}
