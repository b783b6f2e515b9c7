use futures::future::join_all;
use std::future::Future;

/// Every outcome of a group of independent fallible futures, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement<T, E> {
    outcomes: Vec<Result<T, E>>,
}

impl<T, E> Settlement<T, E> {
    pub fn outcomes(&self) -> &[Result<T, E>] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<Result<T, E>> {
        self.outcomes
    }

    pub fn successes(&self) -> impl Iterator<Item = &T> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &E> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().err())
    }

    pub fn success_count(&self) -> usize {
        self.successes().count()
    }

    /// True only when no future succeeded (vacuously true for an empty group).
    pub fn all_failed(&self) -> bool {
        self.outcomes.iter().all(Result::is_err)
    }
}

/// Polls all futures concurrently and waits for every one of them.
///
/// A failure never short-circuits the group: the rest keep running and
/// their results are still collected.
pub async fn settle_all<I, F, T, E>(futures: I) -> Settlement<T, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
{
    Settlement {
        outcomes: join_all(futures).await,
    }
}
