//! When steps for status advancement BDD scenarios.

use super::world::{StatusWorld, run_async};
use rstest_bdd_macros::when;
use serde_json::json;
use todo_store::todo::domain::TodoId;

#[when("the status is moved up")]
fn status_moved_up(world: &mut StatusWorld) -> Result<(), eyre::Report> {
    let id = world
        .last_created
        .as_ref()
        .map(|item| item.id())
        .ok_or_else(|| eyre::eyre!("missing created todo in scenario world"))?;
    world.last_move = Some(run_async(world.service.move_status_up(id)));
    Ok(())
}

#[when("the status of todo {id:i64} is moved up")]
fn status_of_id_moved_up(world: &mut StatusWorld, id: i64) {
    world.last_move = Some(run_async(world.service.move_status_up(TodoId::new(id))));
}

#[when("a change-up request is sent for the todo")]
fn change_up_request_sent(world: &mut StatusWorld) -> Result<(), eyre::Report> {
    let id = world
        .last_created
        .as_ref()
        .map(|item| item.id().to_string())
        .ok_or_else(|| eyre::eyre!("missing created todo in scenario world"))?;
    let body = serde_json::to_vec(&json!({ "changeUp": "true" }))?;
    let response = run_async(world.api().update(&id, &body));
    world.last_response = Some(response);
    Ok(())
}
