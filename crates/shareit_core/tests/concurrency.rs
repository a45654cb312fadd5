use shareit_core::{
    ErrorKind, InMemoryItemRepository, InMemoryUserRepository, ItemRepository, NewItem, NewUser,
    UserRepository,
};
use std::collections::HashSet;
use std::thread;

const THREADS: usize = 8;
const PER_THREAD: usize = 50;

#[test]
fn concurrent_creates_never_share_an_id() {
    let items = InMemoryItemRepository::new();

    let ids = thread::scope(|scope| {
        let handles = (0..THREADS)
            .map(|owner| {
                let items = &items;
                scope.spawn(move || {
                    (0..PER_THREAD)
                        .map(|n| {
                            items
                                .create(NewItem::new(format!("item {n}"), "bulk", true), owner as u64)
                                .unwrap()
                                .id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });

    let unique = ids.iter().copied().collect::<HashSet<_>>();
    assert_eq!(unique.len(), THREADS * PER_THREAD);
    assert_eq!(unique.iter().max().copied(), Some((THREADS * PER_THREAD) as u64));
    assert_eq!(items.len(), THREADS * PER_THREAD);
}

#[test]
fn concurrent_creates_with_one_email_admit_exactly_one_user() {
    let users = InMemoryUserRepository::new();

    let outcomes = thread::scope(|scope| {
        let handles = (0..THREADS)
            .map(|n| {
                let users = &users;
                let email = if n % 2 == 0 { "race@x.com" } else { "RACE@x.com" };
                scope.spawn(move || users.create(NewUser::new(format!("racer {n}"), email)))
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });

    let winners = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    assert_eq!(winners, 1);
    assert!(outcomes
        .iter()
        .filter_map(|outcome| outcome.as_ref().err())
        .all(|err| err.kind() == ErrorKind::Conflict));
    assert_eq!(users.find_all().len(), 1);
}
