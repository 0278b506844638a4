//! In-memory integration tests for create, read, update and delete flows.

use super::helpers::{TestApi, TestService, api, payload, service};
use eyre::ensure;
use rstest::rstest;
use serde_json::json;
use todo_store::todo::{
    domain::{TodoId, TodoStatus},
    services::TodoErrorKind,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_then_get_returns_the_stored_item(service: TestService) -> eyre::Result<()> {
    let created = service
        .add(payload("Buy groceries", TodoStatus::Pending, Some("2025-06-10"))?)
        .await?;

    let fetched = service.get_one(created.id()).await?;

    ensure!(fetched == created, "fetched item differs from created item");
    ensure!(fetched.id() == TodoId::new(1), "first id should be 1");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn change_task_replaces_every_field(service: TestService) -> eyre::Result<()> {
    let created = service
        .add(payload("Draft", TodoStatus::Pending, Some("2025-06-10"))?)
        .await?;

    service
        .change_task(
            created.id(),
            payload("Final", TodoStatus::Canceled, Some("2025-07-01"))?,
        )
        .await?;
    let fetched = service.get_one(created.id()).await?;

    ensure!(fetched.task().as_str() == "Final", "task not replaced");
    ensure!(fetched.status() == TodoStatus::Canceled, "status not replaced");
    ensure!(
        fetched.due().map(|due| due.to_string()).as_deref() == Some("2025-07-01"),
        "due not replaced"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removal_frees_nothing_for_reuse(service: TestService) -> eyre::Result<()> {
    let first = service
        .add(payload("one", TodoStatus::Pending, None)?)
        .await?;
    service.remove(first.id()).await?;

    let second = service
        .add(payload("two", TodoStatus::Pending, None)?)
        .await?;
    let lookup = service.get_one(first.id()).await;

    ensure!(second.id() == TodoId::new(2), "identifier was reused");
    ensure!(
        lookup.map_err(|err| err.kind()).err() == Some(TodoErrorKind::NotFound),
        "removed item is still visible"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn request_flow_round_trips_through_the_adapter(api: TestApi) -> eyre::Result<()> {
    let created = api
        .create(&serde_json::to_vec(&json!({
            "task": "<b>Water</b> plants",
            "due": "2025-06-12",
        }))?)
        .await;
    ensure!(created.status().as_u16() == 201, "create failed: {created:?}");

    let fetched = api.get("1").await;
    ensure!(
        fetched.body()["task"] == json!("<b>Water</b> plants"),
        "allowed markup should be preserved: {fetched:?}"
    );

    let removed = api.remove("1").await;
    ensure!(removed.status().as_u16() == 200, "remove failed: {removed:?}");
    ensure!(api.get("1").await.status().as_u16() == 404, "item still present");
    Ok(())
}
