//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `shareit_core` linkage and run one deterministic store scenario.
//! - Enable file logging when `SHAREIT_LOG_DIR` is set.

use log::info;
use shareit_core::{
    init_logging, InMemoryItemRepository, InMemoryUserRepository, ItemService, LoggingConfig,
    NewItem, NewUser, RepoResult, UserPatch, UserService,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("shareit_core ping={}", shareit_core::ping());
    println!("shareit_core version={}", shareit_core::core_version());

    match LoggingConfig::from_env() {
        Ok(Some(config)) => {
            if let Err(err) = init_logging(&config) {
                eprintln!("logging disabled: {err}");
            }
        }
        Ok(None) => {}
        Err(err) => eprintln!("logging disabled: {err}"),
    }

    match run_scenario() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("scenario failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_scenario() -> RepoResult<()> {
    let users = InMemoryUserRepository::new();
    let items = InMemoryItemRepository::new();
    let user_service = UserService::new(&users);
    let item_service = ItemService::new(&items, &users);

    let ann = user_service.create_user(NewUser::new("Ann", "A@X.com"))?;
    println!("created user id={}", ann.id);

    match user_service.create_user(NewUser::new("Bo", "a@x.com")) {
        Ok(user) => println!("unexpected duplicate user id={}", user.id),
        Err(err) => println!("duplicate email rejected kind={:?}", err.kind()),
    }

    user_service.update_user(ann.id, UserPatch::default().with_email("ann@new.com"))?;
    let bo = user_service.create_user(NewUser::new("Bo", "a@x.com"))?;
    println!("created user id={} with released email", bo.id);

    item_service.create_item(NewItem::new("Drill", "Cordless drill", true), ann.id)?;
    item_service.create_item(NewItem::new("Ladder", "Aluminium ladder", false), ann.id)?;
    let hits = item_service.search_items("drill");
    println!("search hits={}", hits.len());

    info!(
        "event=cli_scenario module=cli status=ok users={} items={}",
        users.len(),
        items.len()
    );
    Ok(())
}
