//! Keyset pagination tests over the attempts listing.

use assess_storage::migrations::run_migrations;
use assess_storage::pagination::Direction;
use assess_storage::queries::attempts::{insert_attempt, page_recent};
use rusqlite::Connection;

fn setup_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn).unwrap();
    conn
}

fn seed_form(conn: &Connection) -> i64 {
    assess_storage::queries::forms::insert_form(conn, "Form A", 1_700_000_000).unwrap()
}

/// Insert n attempts with strictly increasing created_at. Display order is
/// newest first, so ids come back descending.
fn seed_attempts(conn: &Connection, form_id: i64, n: i64) -> Vec<i64> {
    (0..n)
        .map(|i| insert_attempt(conn, form_id, &format!("student-{i}"), 1_700_000_000 + i).unwrap())
        .collect()
}

fn ids(page: &assess_storage::pagination::Page<assess_storage::queries::attempts::AttemptRow>) -> Vec<i64> {
    page.items.iter().map(|a| a.id).collect()
}

#[test]
fn forward_paging_covers_all_rows_in_four_pages() {
    let conn = setup_db();
    let form_id = seed_form(&conn);
    seed_attempts(&conn, form_id, 10);

    let mut cursor: Option<String> = None;
    let mut sizes = Vec::new();
    let mut seen = Vec::new();

    loop {
        let page = page_recent(&conn, cursor.as_deref(), Direction::Forward, 3).unwrap();
        sizes.push(page.items.len());
        seen.extend(ids(&page));
        if !page.has_next {
            assert!(page.next_cursor.is_none());
            break;
        }
        cursor = page.next_cursor.clone();
        assert!(cursor.is_some());
    }

    assert_eq!(sizes, vec![3, 3, 3, 1]);
    assert_eq!(seen.len(), 10);
    // Newest first, no duplicates, no gaps.
    let mut expected: Vec<i64> = seen.clone();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(seen, expected);
}

#[test]
fn first_page_has_no_prev() {
    let conn = setup_db();
    let form_id = seed_form(&conn);
    seed_attempts(&conn, form_id, 5);

    let page = page_recent(&conn, None, Direction::Forward, 3).unwrap();
    assert!(!page.has_prev);
    assert!(page.prev_cursor.is_none());
    assert!(page.has_next);
}

#[test]
fn backward_from_page_reproduces_previous_page() {
    let conn = setup_db();
    let form_id = seed_form(&conn);
    seed_attempts(&conn, form_id, 10);

    let page1 = page_recent(&conn, None, Direction::Forward, 3).unwrap();
    let page2 = page_recent(&conn, page1.next_cursor.as_deref(), Direction::Forward, 3).unwrap();
    assert!(page2.has_prev);

    // Cursor round-trip law: backward from page 2 is exactly page 1.
    let back = page_recent(&conn, page2.prev_cursor.as_deref(), Direction::Backward, 3).unwrap();
    assert_eq!(ids(&back), ids(&page1));
    assert!(back.has_next);

    // And the middle of the listing round-trips too.
    let page3 = page_recent(&conn, page2.next_cursor.as_deref(), Direction::Forward, 3).unwrap();
    let back2 = page_recent(&conn, page3.prev_cursor.as_deref(), Direction::Backward, 3).unwrap();
    assert_eq!(ids(&back2), ids(&page2));
}

#[test]
fn backward_from_first_page_reports_no_prev() {
    let conn = setup_db();
    let form_id = seed_form(&conn);
    seed_attempts(&conn, form_id, 6);

    let page1 = page_recent(&conn, None, Direction::Forward, 3).unwrap();
    let page2 = page_recent(&conn, page1.next_cursor.as_deref(), Direction::Forward, 3).unwrap();
    let back = page_recent(&conn, page2.prev_cursor.as_deref(), Direction::Backward, 3).unwrap();

    // We are back at the first page; nothing earlier remains.
    assert_eq!(ids(&back), ids(&page1));
    assert!(!back.has_prev);
    assert!(back.prev_cursor.is_none());
}

#[test]
fn malformed_cursor_degrades_to_first_page() {
    let conn = setup_db();
    let form_id = seed_form(&conn);
    seed_attempts(&conn, form_id, 7);

    let first = page_recent(&conn, None, Direction::Forward, 3).unwrap();
    for bad in ["%%%", "bm90IGEgY3Vyc29y", ""] {
        let page = page_recent(&conn, Some(bad), Direction::Backward, 3).unwrap();
        assert_eq!(ids(&page), ids(&first), "token {bad:?} should act as no cursor");
        assert!(!page.has_prev);
    }
}

#[test]
fn tied_sort_values_break_on_id() {
    let conn = setup_db();
    let form_id = seed_form(&conn);
    // All rows share one timestamp; ordering falls entirely to the id.
    for i in 0..5 {
        insert_attempt(&conn, form_id, &format!("s{i}"), 1_700_000_000).unwrap();
    }

    let page1 = page_recent(&conn, None, Direction::Forward, 2).unwrap();
    let page2 = page_recent(&conn, page1.next_cursor.as_deref(), Direction::Forward, 2).unwrap();
    let page3 = page_recent(&conn, page2.next_cursor.as_deref(), Direction::Forward, 2).unwrap();

    let mut all = ids(&page1);
    all.extend(ids(&page2));
    all.extend(ids(&page3));
    assert_eq!(all.len(), 5, "no duplicates or gaps across tied pages");
    let mut sorted = all.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(all, sorted);
    assert!(!page3.has_next);
}

#[test]
fn cursor_position_survives_deletions() {
    let conn = setup_db();
    let form_id = seed_form(&conn);
    seed_attempts(&conn, form_id, 9);

    let page1 = page_recent(&conn, None, Direction::Forward, 3).unwrap();
    let expected_page2 = page_recent(&conn, page1.next_cursor.as_deref(), Direction::Forward, 3)
        .unwrap();

    // Deleting rows from page 1 must not shift an already-issued cursor.
    conn.execute("DELETE FROM attempts WHERE id = ?1", [ids(&page1)[0]])
        .unwrap();
    let page2 = page_recent(&conn, page1.next_cursor.as_deref(), Direction::Forward, 3).unwrap();
    assert_eq!(ids(&page2), ids(&expected_page2));
}

#[test]
fn empty_listing_yields_empty_page() {
    let conn = setup_db();

    let page = page_recent(&conn, None, Direction::Forward, 10).unwrap();
    assert!(page.items.is_empty());
    assert!(!page.has_next);
    assert!(!page.has_prev);
    assert!(page.next_cursor.is_none());
    assert!(page.prev_cursor.is_none());
}

#[test]
fn short_final_page() {
    let conn = setup_db();
    let form_id = seed_form(&conn);
    seed_attempts(&conn, form_id, 4);

    let page1 = page_recent(&conn, None, Direction::Forward, 3).unwrap();
    let page2 = page_recent(&conn, page1.next_cursor.as_deref(), Direction::Forward, 3).unwrap();
    assert_eq!(page2.items.len(), 1);
    assert!(!page2.has_next);
    assert!(page2.next_cursor.is_none());
}
