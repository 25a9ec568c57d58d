//! Fan-out/fan-in over independent remote lookups.
//!
//! One tokio task per item. Outcomes are gathered in completion order but
//! returned in input order. The first error observed wins; the remaining
//! tasks are aborted when the `JoinSet` is dropped.

use crate::domain::DomainError;
use std::future::Future;
use tokio::task::JoinSet;
use tracing::debug;

/// Run `worker` concurrently for every item and collect the results in input order.
pub async fn fan_out<T, R, F, Fut>(
    items: impl IntoIterator<Item = T>,
    worker: F,
) -> Result<Vec<R>, DomainError>
where
    T: Send + 'static,
    R: Send + 'static,
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<R, DomainError>> + Send + 'static,
{
    let mut set = JoinSet::new();
    let mut pending = 0usize;
    for (index, item) in items.into_iter().enumerate() {
        let task = worker(item);
        set.spawn(async move { (index, task.await) });
        pending += 1;
    }

    let mut slots: Vec<Option<R>> = std::iter::repeat_with(|| None).take(pending).collect();
    while let Some(joined) = set.join_next().await {
        let (index, outcome) = joined.map_err(|e| DomainError::Task(e.to_string()))?;
        match outcome {
            Ok(value) => slots[index] = Some(value),
            Err(e) => {
                debug!(index, remaining = set.len(), error = %e, "fan-out worker failed, aborting siblings");
                return Err(e);
            }
        }
    }

    Ok(slots.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_results_follow_input_order() {
        // Earlier items sleep longer, so completion order is reversed.
        let out = fan_out(vec![30u64, 20, 10, 0], |ms| async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            Ok::<_, DomainError>(ms)
        })
        .await
        .unwrap();

        assert_eq!(out, vec![30, 20, 10, 0]);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let out: Vec<u8> = fan_out(Vec::<u8>::new(), |x| async move { Ok(x) })
            .await
            .unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_first_error_wins() {
        let result = fan_out(vec![1, 2, 3], |n| async move {
            if n == 2 {
                Err(DomainError::MissingTodoList {
                    board_id: format!("board{}", n),
                })
            } else {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Ok(n)
            }
        })
        .await;

        match result {
            Err(DomainError::MissingTodoList { board_id }) => assert_eq!(board_id, "board2"),
            other => panic!("expected MissingTodoList, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_aborts_slow_siblings() {
        let finished = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&finished);

        let result = fan_out(vec![0u64, 500, 500], move |ms| {
            let counter = Arc::clone(&counter);
            async move {
                if ms == 0 {
                    return Err(DomainError::Task("boom".into()));
                }
                tokio::time::sleep(Duration::from_millis(ms)).await;
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(ms)
            }
        })
        .await;

        assert!(result.is_err());
        tokio::time::sleep(Duration::from_millis(700)).await;
        assert_eq!(finished.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_panicking_worker_is_reported() {
        let result = fan_out(vec![1], |_| async move {
            if true {
                panic!("worker exploded");
            }
            Ok::<u8, DomainError>(0)
        })
        .await;

        assert!(matches!(result, Err(DomainError::Task(_))));
    }
}
