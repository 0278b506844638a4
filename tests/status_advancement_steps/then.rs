//! Then steps for status advancement BDD scenarios.

use super::world::{StatusWorld, run_async};
use rstest_bdd_macros::then;
use todo_store::todo::{domain::TodoStatus, services::TodoErrorKind};

fn expected_status(raw: &str) -> Result<TodoStatus, eyre::Report> {
    TodoStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

#[then(r#"the new status is "{status}""#)]
fn new_status_is(world: &StatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected = expected_status(&status)?;
    let result = world
        .last_move
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;

    match result {
        Ok(actual) if *actual == expected => Ok(()),
        other => Err(eyre::eyre!("expected new status {expected}, got {other:?}")),
    }
}

fn move_failed_with(world: &StatusWorld, kind: TodoErrorKind) -> Result<(), eyre::Report> {
    let result = world
        .last_move
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;

    match result {
        Err(err) if err.kind() == kind => Ok(()),
        other => Err(eyre::eyre!("expected {kind:?} failure, got {other:?}")),
    }
}

#[then("the move is refused as a transition error")]
fn move_refused_as_transition(world: &StatusWorld) -> Result<(), eyre::Report> {
    move_failed_with(world, TodoErrorKind::Transition)
}

#[then("the move is refused as not found")]
fn move_refused_as_not_found(world: &StatusWorld) -> Result<(), eyre::Report> {
    move_failed_with(world, TodoErrorKind::NotFound)
}

#[then(r#"the stored status is "{status}""#)]
fn stored_status_is(world: &StatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected = expected_status(&status)?;
    let id = world
        .last_created
        .as_ref()
        .map(|item| item.id())
        .ok_or_else(|| eyre::eyre!("missing created todo"))?;

    let stored = run_async(world.service.get_one(id))?;
    eyre::ensure!(
        stored.status() == expected,
        "expected stored status {expected}, found {}",
        stored.status()
    );
    Ok(())
}

#[then("the response status is {code:u16}")]
fn response_status_is(world: &StatusWorld, code: u16) -> Result<(), eyre::Report> {
    let response = world
        .last_response
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing response"))?;
    eyre::ensure!(
        response.status().as_u16() == code,
        "expected status {code}, got {response:?}"
    );
    Ok(())
}
