use projboard_core::{FailureKind, ListenerError, MoveOutcome, Project, ProjectStatus, ProjectStore};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use uuid::Uuid;

type Received = Rc<RefCell<Vec<Vec<Project>>>>;

fn recording_listener(store: &mut ProjectStore) -> Received {
    let received: Received = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);
    store.subscribe(move |snapshot| {
        sink.borrow_mut().push(snapshot);
        Ok(())
    });
    received
}

#[test]
fn add_project_appends_active_project_with_unique_id() {
    let mut store = ProjectStore::new();
    let mut seen = HashSet::new();

    for index in 0..20 {
        let before = store.len();
        let added = store.add_project(format!("Project {index}"), "Some description", 2);

        assert_eq!(store.len(), before + 1);
        assert!(seen.insert(added.id), "id reused: {}", added.id);
        let stored = store.get(added.id).unwrap();
        assert_eq!(stored.status, ProjectStatus::Active);
        assert_eq!(store.snapshot().last().unwrap().id, added.id);
    }
}

#[test]
fn add_then_move_matches_documented_example() {
    let mut store = ProjectStore::new();
    let first_listener = recording_listener(&mut store);
    let second_listener = recording_listener(&mut store);

    let first = store.add_project("Build UI", "Initial version", 3).id;
    let second = store.add_project("Write tests", "Cover store", 2).id;

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].title, "Build UI");
    assert_eq!(snapshot[1].title, "Write tests");
    assert!(snapshot.iter().all(|p| p.status == ProjectStatus::Active));

    let outcome = store.move_project(first, ProjectStatus::Finished);
    let MoveOutcome::Moved(report) = &outcome else {
        panic!("expected a move, got {outcome:?}");
    };
    assert_eq!(report.delivered, 2);
    assert!(report.is_clean());

    for listener in [&first_listener, &second_listener] {
        let received = listener.borrow();
        assert_eq!(received.len(), 3, "two adds plus one move");
        let latest = received.last().unwrap();
        assert_eq!(latest[0].id, first);
        assert_eq!(latest[0].status, ProjectStatus::Finished);
        assert_eq!(latest[1].id, second);
        assert_eq!(latest[1].status, ProjectStatus::Active);
    }
}

#[test]
fn move_unknown_id_changes_nothing_and_notifies_nobody() {
    let mut store = ProjectStore::new();
    store.add_project("Build UI", "Initial version", 3);
    let received = recording_listener(&mut store);
    let before = store.snapshot();

    for status in [ProjectStatus::Active, ProjectStatus::Finished] {
        assert_eq!(
            store.move_project(Uuid::new_v4(), status),
            MoveOutcome::NotFound
        );
    }

    assert_eq!(store.snapshot(), before);
    assert!(received.borrow().is_empty());
}

#[test]
fn move_to_current_status_is_silent_no_op() {
    let mut store = ProjectStore::new();
    let id = store.add_project("Build UI", "Initial version", 3).id;
    let received = recording_listener(&mut store);
    let before = store.snapshot();

    assert_eq!(
        store.move_project(id, ProjectStatus::Active),
        MoveOutcome::Unchanged
    );
    assert_eq!(store.snapshot(), before);
    assert!(received.borrow().is_empty());
}

#[test]
fn listener_mutating_its_snapshot_cannot_touch_store_or_other_listeners() {
    let mut store = ProjectStore::new();
    store.subscribe(|mut snapshot| {
        for project in snapshot.iter_mut() {
            project.status = ProjectStatus::Finished;
            project.title.clear();
        }
        snapshot.clear();
        Ok(())
    });
    let later = recording_listener(&mut store);

    let id = store.add_project("Build UI", "Initial version", 3).id;

    let stored = store.get(id).unwrap();
    assert_eq!(stored.status, ProjectStatus::Active);
    assert_eq!(stored.title, "Build UI");

    let received = later.borrow();
    assert_eq!(received[0].len(), 1);
    assert_eq!(received[0][0].title, "Build UI");
    assert_eq!(received[0][0].status, ProjectStatus::Active);
}

#[test]
fn listeners_run_in_subscription_order() {
    let mut store = ProjectStore::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    for tag in ["first", "second", "third"] {
        let order = Rc::clone(&order);
        store.subscribe(move |_| {
            order.borrow_mut().push(tag);
            Ok(())
        });
    }

    store.add_project("Build UI", "Initial version", 3);

    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn failing_and_panicking_listeners_do_not_block_delivery() {
    let mut store = ProjectStore::new();
    let failing = store.subscribe(|_| Err(ListenerError::new("render target missing")));
    let panicking = store.subscribe(|_| panic!("listener blew up"));
    let received = recording_listener(&mut store);

    let added = store.add_project("Build UI", "Initial version", 3);

    assert_eq!(received.borrow().len(), 1);
    assert_eq!(added.report.delivered, 1);
    assert_eq!(added.report.attempted(), 3);
    assert_eq!(added.report.failures.len(), 2);
    assert_eq!(added.report.failures[0].listener, failing);
    assert_eq!(
        added.report.failures[0].kind,
        FailureKind::Failed(ListenerError::new("render target missing"))
    );
    assert_eq!(added.report.failures[1].listener, panicking);
    assert_eq!(
        added.report.failures[1].kind,
        FailureKind::Panicked("listener blew up".to_string())
    );
}

#[test]
fn unsubscribed_listener_receives_no_further_snapshots() {
    let mut store = ProjectStore::new();
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let id = store.subscribe(move |_| {
        *counter.borrow_mut() += 1;
        Ok(())
    });

    store.add_project("Build UI", "Initial version", 3);
    assert!(store.unsubscribe(id));
    store.add_project("Write tests", "Cover store", 2);

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn same_callback_registered_twice_runs_twice() {
    let mut store = ProjectStore::new();
    let calls = Rc::new(RefCell::new(0));
    for _ in 0..2 {
        let counter = Rc::clone(&calls);
        store.subscribe(move |_| {
            *counter.borrow_mut() += 1;
            Ok(())
        });
    }

    store.add_project("Build UI", "Initial version", 3);

    assert_eq!(*calls.borrow(), 2);
}
