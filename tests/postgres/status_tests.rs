//! `PostgreSQL` integration tests for status advancement.

use super::helpers::{payload, setup_service};
use eyre::ensure;
use todo_store::todo::{domain::TodoStatus, services::TodoErrorKind};

#[tokio::test(flavor = "multi_thread")]
async fn canceled_row_walks_to_completed() -> eyre::Result<()> {
    let Some(service) = setup_service().await? else {
        return Ok(());
    };
    let created = service
        .add(payload("Walk", TodoStatus::Canceled, None)?)
        .await?;

    let mut walk = Vec::new();
    for _ in 0..3 {
        walk.push(service.move_status_up(created.id()).await?);
    }
    let fourth = service.move_status_up(created.id()).await;

    ensure!(
        walk == [
            TodoStatus::Pending,
            TodoStatus::InProgress,
            TodoStatus::Completed
        ],
        "unexpected walk {walk:?}"
    );
    ensure!(
        fourth.map_err(|err| err.kind()) == Err(TodoErrorKind::Transition),
        "completed rows must not advance"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn refused_advance_leaves_row_untouched() -> eyre::Result<()> {
    let Some(service) = setup_service().await? else {
        return Ok(());
    };
    let created = service
        .add(payload("Done", TodoStatus::Completed, Some("2025-06-10"))?)
        .await?;

    let result = service.move_status_up(created.id()).await;
    let stored = service.get_one(created.id()).await?;

    ensure!(result.is_err(), "advance should be refused");
    ensure!(stored == created, "row changed: {stored:?}");
    Ok(())
}
