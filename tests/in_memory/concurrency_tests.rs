//! In-memory integration tests for concurrent callers.

use std::collections::BTreeSet;

use super::helpers::{TestService, payload, service};
use eyre::ensure;
use rstest::rstest;
use todo_store::todo::{domain::TodoStatus, services::TodoErrorKind};

const CALLERS: usize = 32;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_receive_distinct_ids(service: TestService) -> eyre::Result<()> {
    let mut handles = Vec::with_capacity(CALLERS);
    for n in 0..CALLERS {
        let handle_service = service.clone();
        handles.push(tokio::spawn(async move {
            let item = payload(&format!("task {n}"), TodoStatus::Pending, None)?;
            Ok::<_, eyre::Report>(handle_service.add(item).await?.id().value())
        }));
    }

    let mut ids = BTreeSet::new();
    for handle in handles {
        ids.insert(handle.await??);
    }

    let expected: BTreeSet<i64> = (1..).take(CALLERS).collect();
    ensure!(ids == expected, "ids are not 1..={CALLERS}: {ids:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_advances_never_skip_a_step(service: TestService) -> eyre::Result<()> {
    let created = service
        .add(payload("race", TodoStatus::Canceled, None)?)
        .await?;

    let mut handles = Vec::with_capacity(CALLERS);
    for _ in 0..CALLERS {
        let handle_service = service.clone();
        let id = created.id();
        handles.push(tokio::spawn(async move {
            handle_service
                .move_status_up(id)
                .await
                .map_err(|err| err.kind())
        }));
    }

    let mut reached = Vec::new();
    let mut refused = 0_usize;
    for handle in handles {
        match handle.await? {
            Ok(status) => reached.push(status),
            Err(TodoErrorKind::Transition) => refused += 1,
            Err(other) => eyre::bail!("unexpected failure {other:?}"),
        }
    }

    ensure!(reached.len() == 3, "exactly three advances should succeed");
    for step in [
        TodoStatus::Pending,
        TodoStatus::InProgress,
        TodoStatus::Completed,
    ] {
        ensure!(reached.contains(&step), "step {step} was skipped: {reached:?}");
    }
    ensure!(refused == CALLERS - 3, "the rest should be refused");
    ensure!(
        service.get_one(created.id()).await?.status() == TodoStatus::Completed,
        "final status should be Completed"
    );
    Ok(())
}
