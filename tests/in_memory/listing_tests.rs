//! In-memory integration tests for filtered and paginated listings.

use super::helpers::{TestService, add_numbered, payload, service};
use eyre::ensure;
use rstest::rstest;
use todo_store::todo::domain::{ListQuery, TodoStatus};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn third_page_of_twenty_five_holds_five_items(service: TestService) -> eyre::Result<()> {
    add_numbered(&service, 25).await?;

    let page = service
        .list(&ListQuery::from_params(None, Some("3"), Some("10")))
        .await?;

    ensure!(page.total == 25, "total should count every item");
    ensure!(page.items.len() == 5, "expected 5 items, got {}", page.items.len());
    let first = page.items.first().map(|item| item.task().as_str().to_owned());
    ensure!(first.as_deref() == Some("item 21"), "unexpected first item {first:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn page_beyond_the_end_is_empty(service: TestService) -> eyre::Result<()> {
    add_numbered(&service, 25).await?;

    let page = service
        .list(&ListQuery::from_params(None, Some("100"), Some("10")))
        .await?;

    ensure!(page.items.is_empty(), "expected an empty page");
    ensure!(page.total == 25, "total should still count every item");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_items_sort_last(service: TestService) -> eyre::Result<()> {
    service
        .add(payload("finished", TodoStatus::Completed, Some("2025-01-01"))?)
        .await?;
    service
        .add(payload("later", TodoStatus::Pending, Some("2025-06-20"))?)
        .await?;
    service
        .add(payload("sooner", TodoStatus::InProgress, Some("2025-06-01"))?)
        .await?;

    let page = service.list(&ListQuery::new()).await?;

    let tasks: Vec<&str> = page.items.iter().map(|item| item.task().as_str()).collect();
    ensure!(
        tasks == ["sooner", "later", "finished"],
        "unexpected order {tasks:?}"
    );
    Ok(())
}

#[rstest]
#[case(Some("Completed"), 1)]
#[case(Some("Pending"), 2)]
#[case(Some("completed"), 3)]
#[case(Some("bogus"), 3)]
#[case(None, 3)]
#[tokio::test(flavor = "multi_thread")]
async fn status_filter_matches_exactly(
    service: TestService,
    #[case] status: Option<&str>,
    #[case] expected: usize,
) -> eyre::Result<()> {
    service
        .add(payload("a", TodoStatus::Pending, Some("2025-06-01"))?)
        .await?;
    service
        .add(payload("b", TodoStatus::Completed, Some("2025-06-02"))?)
        .await?;
    service
        .add(payload("c", TodoStatus::Pending, Some("2025-06-03"))?)
        .await?;

    let page = service
        .list(&ListQuery::from_params(status, None, None))
        .await?;

    ensure!(page.total == expected, "expected {expected}, got {}", page.total);
    ensure!(
        page.items.len() == expected,
        "page should hold every match"
    );
    Ok(())
}
