use projboard_core::{MoveOutcome, ProjectBoard, ProjectInput, ProjectStatus, ValidationError};
use uuid::Uuid;

#[test]
fn submit_adds_to_active_view_only() {
    let mut board = ProjectBoard::new();
    let added = board
        .submit(&ProjectInput::new("Build UI", "Initial version", "3"))
        .unwrap();
    let id = added.id;
    assert_eq!(added.report.delivered, 2);
    assert!(added.report.is_clean());

    let active = board.active();
    assert_eq!(active.projects().len(), 1);
    assert_eq!(active.projects()[0].id, id);
    assert!(board.finished().projects().is_empty());
}

#[test]
fn rejected_submit_leaves_board_untouched() {
    let mut board = ProjectBoard::new();
    let err = board
        .submit(&ProjectInput::new("Build UI", "tiny", "3"))
        .unwrap_err();

    assert_eq!(err, ValidationError::DescriptionTooShort { len: 4, min: 5 });
    assert!(board.store().is_empty());
    assert!(board.active().projects().is_empty());
}

#[test]
fn drop_moves_project_between_views_both_ways() {
    let mut board = ProjectBoard::new();
    let first = board
        .submit(&ProjectInput::new("Build UI", "Initial version", "3"))
        .unwrap()
        .id;
    let second = board
        .submit(&ProjectInput::new("Write tests", "Cover store", "2"))
        .unwrap()
        .id;

    let outcome = board.drop_on(ProjectStatus::Finished, &first.to_string());
    assert!(outcome.is_moved());
    assert_eq!(
        board
            .active()
            .projects()
            .iter()
            .map(|p| p.id)
            .collect::<Vec<_>>(),
        vec![second]
    );
    assert_eq!(board.finished().projects()[0].id, first);

    assert_eq!(
        board.drop_on(ProjectStatus::Finished, &first.to_string()),
        MoveOutcome::Unchanged
    );

    assert!(board
        .drop_on(ProjectStatus::Active, &first.to_string())
        .is_moved());
    assert_eq!(board.active().projects().len(), 2);
    assert_eq!(board.active().projects()[0].id, first);
    assert!(board.finished().projects().is_empty());
}

#[test]
fn drop_of_unknown_id_is_not_found() {
    let mut board = ProjectBoard::new();
    assert_eq!(
        board.drop_on(ProjectStatus::Finished, &Uuid::new_v4().to_string()),
        MoveOutcome::NotFound
    );
}

#[test]
fn render_shows_both_lists() {
    let mut board = ProjectBoard::new();
    let first = board
        .submit(&ProjectInput::new("Build UI", "Initial version", "3"))
        .unwrap()
        .id;
    board
        .submit(&ProjectInput::new("Write tests", "Cover store", "1"))
        .unwrap();
    board.drop_on(ProjectStatus::Finished, &first.to_string());

    assert_eq!(
        board.render(),
        "ACTIVE PROJECTS\n\
         - Write tests | 1 person assigned | Cover store\n\
         \n\
         FINISHED PROJECTS\n\
         - Build UI | 3 people assigned | Initial version"
    );
}
