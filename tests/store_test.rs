//! Tests for the flat-file board store.

use tempfile::TempDir;
use ticboard::{Board, BoardStore, Outcome, Player, Record};

/// Creates a store backed by a file inside a fresh temp directory. The
/// directory guard must stay in scope to keep the file alive.
fn setup_test_store() -> (TempDir, BoardStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = BoardStore::new(dir.path().join("boards.txt"));
    (dir, store)
}

fn board_from(cells: [[u8; 3]; 3]) -> Board {
    Board::try_from(cells).expect("Valid cells")
}

#[tokio::test]
async fn test_append_then_find_round_trip() {
    let (_dir, store) = setup_test_store();

    let record = store.append(Board::new()).await.expect("Append failed");
    let found = store
        .find_by_id(&record.id)
        .await
        .expect("Find failed")
        .expect("Record missing");

    assert_eq!(found.id, record.id);
    assert_eq!(found.board, Board::new());
    assert_eq!(found.outcome, None);
}

#[tokio::test]
async fn test_find_unknown_id_returns_none() {
    let (_dir, store) = setup_test_store();

    store.append(Board::new()).await.expect("Append failed");
    let found = store.find_by_id("no-such-id").await.expect("Find failed");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_on_missing_file_reads_as_empty_store() {
    let (_dir, store) = setup_test_store();

    let found = store.find_by_id("anything").await.expect("Find failed");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_repeated_find_is_idempotent() {
    let (_dir, store) = setup_test_store();

    let record = store.append(Board::new()).await.expect("Append failed");
    let first = store.find_by_id(&record.id).await.expect("Find failed");
    let second = store.find_by_id(&record.id).await.expect("Find failed");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_rewrite_updates_only_the_matching_line() {
    let (_dir, store) = setup_test_store();

    let first = store.append(Board::new()).await.expect("Append failed");
    let second = store.append(Board::new()).await.expect("Append failed");
    let third = store.append(Board::new()).await.expect("Append failed");

    let updated = board_from([[1, 1, 1], [2, 2, 0], [0, 0, 0]]);
    store
        .rewrite(&second.id, updated, Some(Outcome::Winner(Player::One)))
        .await
        .expect("Rewrite failed");

    let found = store
        .find_by_id(&second.id)
        .await
        .expect("Find failed")
        .expect("Record missing");
    assert_eq!(found.board, updated);
    assert_eq!(found.outcome, Some(Outcome::Winner(Player::One)));

    for untouched in [&first, &third] {
        let found = store
            .find_by_id(&untouched.id)
            .await
            .expect("Find failed")
            .expect("Record missing");
        assert_eq!(found.board, Board::new());
        assert_eq!(found.outcome, None);
    }
}

#[tokio::test]
async fn test_rewrite_drops_blank_lines() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("boards.txt");

    let first = Record {
        id: "board-1".to_string(),
        board: Board::new(),
        outcome: None,
    };
    let second = Record {
        id: "board-2".to_string(),
        board: Board::new(),
        outcome: None,
    };
    let contents = format!(
        "{}\n\n{}\n\n",
        first.to_line().expect("Serialize failed"),
        second.to_line().expect("Serialize failed")
    );
    std::fs::write(&path, contents).expect("Seed write failed");

    let store = BoardStore::new(path.clone());
    store
        .rewrite("board-1", board_from([[1, 0, 0], [0, 0, 0], [0, 0, 0]]), None)
        .await
        .expect("Rewrite failed");

    let rewritten = std::fs::read_to_string(&path).expect("Read failed");
    assert!(
        rewritten.lines().all(|line| !line.trim().is_empty()),
        "Blank lines should be dropped: {rewritten:?}"
    );
    assert_eq!(rewritten.lines().count(), 2);
}

#[tokio::test]
async fn test_tie_outcome_round_trips() {
    let (_dir, store) = setup_test_store();

    let record = store.append(Board::new()).await.expect("Append failed");
    let full = board_from([[1, 2, 1], [1, 2, 2], [2, 1, 1]]);
    store
        .rewrite(&record.id, full, Some(Outcome::Tie))
        .await
        .expect("Rewrite failed");

    let found = store
        .find_by_id(&record.id)
        .await
        .expect("Find failed")
        .expect("Record missing");
    assert_eq!(found.outcome, Some(Outcome::Tie));
}

#[test]
fn test_record_line_format_without_outcome() {
    let record = Record {
        id: "abc".to_string(),
        board: Board::new(),
        outcome: None,
    };
    let line = record.to_line().expect("Serialize failed");
    assert_eq!(line, "abc [[0,0,0],[0,0,0],[0,0,0]]");
}

#[test]
fn test_record_line_format_with_winner() {
    let record = Record {
        id: "abc".to_string(),
        board: board_from([[2, 2, 2], [1, 1, 0], [0, 0, 1]]),
        outcome: Some(Outcome::Winner(Player::Two)),
    };
    let line = record.to_line().expect("Serialize failed");
    assert_eq!(line, "abc [[2,2,2],[1,1,0],[0,0,1]] 2");
}

#[test]
fn test_record_line_format_with_tie() {
    let record = Record {
        id: "abc".to_string(),
        board: board_from([[1, 2, 1], [1, 2, 2], [2, 1, 1]]),
        outcome: Some(Outcome::Tie),
    };
    let line = record.to_line().expect("Serialize failed");
    assert_eq!(line, "abc [[1,2,1],[1,2,2],[2,1,1]] true");
}

#[test]
fn test_parse_line_round_trips() {
    let records = [
        Record {
            id: "plain".to_string(),
            board: Board::new(),
            outcome: None,
        },
        Record {
            id: "won".to_string(),
            board: board_from([[1, 1, 1], [2, 2, 0], [0, 0, 0]]),
            outcome: Some(Outcome::Winner(Player::One)),
        },
        Record {
            id: "tied".to_string(),
            board: board_from([[1, 2, 1], [1, 2, 2], [2, 1, 1]]),
            outcome: Some(Outcome::Tie),
        },
    ];

    for record in records {
        let line = record.to_line().expect("Serialize failed");
        let parsed = Record::parse_line(&line).expect("Parse failed");
        assert_eq!(parsed, record);
    }
}

#[test]
fn test_parse_line_rejects_malformed_board() {
    let result = Record::parse_line("abc not-json");
    assert!(result.is_err());
}

#[test]
fn test_parse_line_rejects_missing_board() {
    let result = Record::parse_line("abc");
    assert!(result.is_err());
}

#[test]
fn test_parse_line_rejects_garbage_outcome_token() {
    let result = Record::parse_line("abc [[0,0,0],[0,0,0],[0,0,0]] maybe");
    assert!(result.is_err());

    let result = Record::parse_line("abc [[0,0,0],[0,0,0],[0,0,0]] 9");
    assert!(result.is_err());
}
