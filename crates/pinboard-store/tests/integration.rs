use pinboard_core::Session;
use pinboard_ledger::LedgerError;
use pinboard_record::{Stamp, StampError, Venue};
use pinboard_store::{
    AuthError, Bulletin, DeleteError, EventFields, ScheduleError, StoreError, EVENTS_FILE,
};
use std::fs;
use tempfile::TempDir;

fn now() -> Stamp {
    Stamp::parse("01/06/2025", "12:00").unwrap()
}

fn agora() -> Venue {
    Venue::parse("Agora").unwrap()
}

fn fields(name: &str, venue: &str, date: &str, time: &str) -> EventFields {
    EventFields {
        name: name.to_string(),
        venue: venue.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        description: "a description".to_string(),
    }
}

fn open_bulletin() -> (TempDir, Bulletin) {
    let temp_dir = TempDir::new().unwrap();
    let bulletin = Bulletin::open(temp_dir.path());
    (temp_dir, bulletin)
}

#[test]
fn signup_then_login_scenario() {
    let (_temp_dir, bulletin) = open_bulletin();

    let session = bulletin.signup("alice1", "pass1").unwrap();
    assert_eq!(session.username().unwrap().as_ref(), "alice1");

    assert!(matches!(
        bulletin.login("alice1", "wrong"),
        Err(AuthError::WrongPassword)
    ));
    let session = bulletin.login("alice1", "pass1").unwrap();
    assert!(session.is_organizer());

    let visitor = bulletin.logout(session);
    assert_eq!(visitor, Session::Visitor);
}

#[test]
fn login_distinguishes_unknown_user_from_wrong_password() {
    let (_temp_dir, bulletin) = open_bulletin();
    bulletin.signup("alice1", "pass1").unwrap();

    assert!(matches!(
        bulletin.login("nobody", "pass1"),
        Err(AuthError::UnknownUser { .. })
    ));
    assert!(matches!(
        bulletin.login("alice1", "nope1"),
        Err(AuthError::WrongPassword)
    ));
}

#[test]
fn signup_rejects_taken_username_and_bad_rules() {
    let (_temp_dir, bulletin) = open_bulletin();
    bulletin.signup("alice1", "pass1").unwrap();

    assert!(matches!(
        bulletin.signup("alice1", "other1"),
        Err(AuthError::UsernameTaken { .. })
    ));
    assert!(matches!(bulletin.signup("abc", "pass1"), Err(AuthError::Rule(_))));
    assert!(matches!(bulletin.signup("bob2", "abc"), Err(AuthError::Rule(_))));
    assert!(matches!(
        bulletin.signup("bad name", "pass1"),
        Err(AuthError::Rule(_))
    ));
}

#[test]
fn first_run_reads_as_empty_stores() {
    let (_temp_dir, bulletin) = open_bulletin();

    let board = bulletin.list(&agora(), &Session::Visitor, now()).unwrap();
    assert!(board.is_empty());
    assert!(matches!(
        bulletin.login("alice1", "pass1"),
        Err(AuthError::UnknownUser { .. })
    ));
}

#[test]
fn board_orders_owned_first_then_by_time() {
    let (_temp_dir, bulletin) = open_bulletin();
    let alice = bulletin.signup("alice1", "pass1").unwrap();
    let bob = bulletin.signup("bob2", "pass2").unwrap();

    // E1(owner=A, 10:00), E2(owner=B, 09:00), E3(owner=A, 11:00), same venue.
    bulletin
        .validate_and_create(&fields("E1", "Agora", "01/01/2030", "10:00"), &alice, now())
        .unwrap();
    bulletin
        .validate_and_create(&fields("E2", "Agora", "01/01/2030", "09:00"), &bob, now())
        .unwrap();
    bulletin
        .validate_and_create(&fields("E3", "Agora", "01/01/2030", "11:00"), &alice, now())
        .unwrap();

    let board = bulletin.list(&agora(), &alice, now()).unwrap();
    let names: Vec<&str> = board.iter().map(|e| e.name.as_ref()).collect();
    assert_eq!(names, ["E1", "E3", "E2"]);

    // The visitor sees a single group in time order.
    let board = bulletin.list(&agora(), &Session::Visitor, now()).unwrap();
    let names: Vec<&str> = board.iter().map(|e| e.name.as_ref()).collect();
    assert_eq!(names, ["E2", "E1", "E3"]);
}

#[test]
fn board_is_scoped_to_the_venue() {
    let (_temp_dir, bulletin) = open_bulletin();
    let alice = bulletin.signup("alice1", "pass1").unwrap();

    bulletin
        .validate_and_create(&fields("Here", "Agora", "01/01/2030", "10:00"), &alice, now())
        .unwrap();
    bulletin
        .validate_and_create(&fields("There", "Kaapi", "01/01/2030", "11:00"), &alice, now())
        .unwrap();

    let board = bulletin.list(&agora(), &alice, now()).unwrap();
    let names: Vec<&str> = board.iter().map(|e| e.name.as_ref()).collect();
    assert_eq!(names, ["Here"]);
}

#[test]
fn event_names_are_unique_across_venues() {
    let (_temp_dir, bulletin) = open_bulletin();
    let alice = bulletin.signup("alice1", "pass1").unwrap();

    bulletin
        .validate_and_create(&fields("Talk", "Agora", "01/01/2030", "10:00"), &alice, now())
        .unwrap();
    // Same name at a different venue and time still collides.
    assert!(matches!(
        bulletin.validate_and_create(&fields("Talk", "Kaapi", "02/01/2030", "15:00"), &alice, now()),
        Err(ScheduleError::NameTaken { .. })
    ));
    // The uniqueness check compares trimmed names.
    assert!(matches!(
        bulletin.validate_and_create(&fields("  Talk ", "Kaapi", "02/01/2030", "15:00"), &alice, now()),
        Err(ScheduleError::NameTaken { .. })
    ));
}

#[test]
fn clash_is_soft_and_venue_independent() {
    let (_temp_dir, bulletin) = open_bulletin();
    let alice = bulletin.signup("alice1", "pass1").unwrap();

    bulletin
        .validate_and_create(&fields("Talk", "Agora", "01/01/2030", "10:00"), &alice, now())
        .unwrap();

    // Same venue, same stamp: clash.
    let chat = fields("Chat", "Agora", "01/01/2030", "10:00");
    match bulletin.validate_and_create(&chat, &alice, now()) {
        Err(ScheduleError::ScheduleClash { with, .. }) => assert_eq!(with, "Talk"),
        other => panic!("expected ScheduleClash, got {other:?}"),
    }

    // Different venue, same stamp: still a clash (timestamps are global).
    assert!(matches!(
        bulletin.validate_and_create(&fields("Away", "Kaapi", "01/01/2030", "10:00"), &alice, now()),
        Err(ScheduleError::ScheduleClash { .. })
    ));

    // The override path persists the clashing event alongside the first.
    bulletin.confirm_clash_and_create(&chat, &alice, now()).unwrap();
    let board = bulletin.list(&agora(), &alice, now()).unwrap();
    let names: Vec<&str> = board.iter().map(|e| e.name.as_ref()).collect();
    assert_eq!(names, ["Talk", "Chat"]);
}

#[test]
fn override_path_still_rejects_everything_else() {
    let (_temp_dir, bulletin) = open_bulletin();
    let alice = bulletin.signup("alice1", "pass1").unwrap();

    bulletin
        .validate_and_create(&fields("Talk", "Agora", "01/01/2030", "10:00"), &alice, now())
        .unwrap();
    assert!(matches!(
        bulletin.confirm_clash_and_create(&fields("Talk", "Kaapi", "01/01/2030", "10:00"), &alice, now()),
        Err(ScheduleError::NameTaken { .. })
    ));
    assert!(matches!(
        bulletin.confirm_clash_and_create(&fields("Old", "Agora", "01/01/2020", "10:00"), &alice, now()),
        Err(ScheduleError::EventInPast { .. })
    ));
}

#[test]
fn validation_order_and_syntax_errors() {
    let (_temp_dir, bulletin) = open_bulletin();
    let alice = bulletin.signup("alice1", "pass1").unwrap();

    assert!(matches!(
        bulletin.validate_and_create(&fields("", "Agora", "01/01/2030", "10:00"), &alice, now()),
        Err(ScheduleError::EmptyField { field: "name" })
    ));
    // A bad date wins over a bad time.
    assert!(matches!(
        bulletin.validate_and_create(&fields("X", "Agora", "99/99/2030", "99:99"), &alice, now()),
        Err(ScheduleError::Stamp(StampError::InvalidDate(_)))
    ));
    assert!(matches!(
        bulletin.validate_and_create(&fields("X", "Agora", "01/01/2030", "25:00"), &alice, now()),
        Err(ScheduleError::Stamp(StampError::InvalidTime(_)))
    ));
    // February 29 is valid only in leap years.
    assert!(matches!(
        bulletin.validate_and_create(&fields("X", "Agora", "29/02/2031", "10:00"), &alice, now()),
        Err(ScheduleError::Stamp(StampError::InvalidDate(_)))
    ));
    bulletin
        .validate_and_create(&fields("X", "Agora", "29/02/2032", "10:00"), &alice, now())
        .unwrap();
    // Unknown venues are rejected before any store lookup.
    assert!(matches!(
        bulletin.validate_and_create(&fields("Y", "Atlantis", "01/01/2030", "10:00"), &alice, now()),
        Err(ScheduleError::Field(_))
    ));
}

#[test]
fn creating_at_exactly_now_is_allowed() {
    let (_temp_dir, bulletin) = open_bulletin();
    let alice = bulletin.signup("alice1", "pass1").unwrap();

    bulletin
        .validate_and_create(&fields("Soon", "Agora", "01/06/2025", "12:00"), &alice, now())
        .unwrap();
    assert!(matches!(
        bulletin.validate_and_create(&fields("Late", "Agora", "01/06/2025", "11:59"), &alice, now()),
        Err(ScheduleError::EventInPast { .. })
    ));
}

#[test]
fn past_events_are_hidden_by_list_but_kept_until_sweep() {
    let (temp_dir, bulletin) = open_bulletin();
    let alice = bulletin.signup("alice1", "pass1").unwrap();

    bulletin
        .validate_and_create(&fields("Gone", "Agora", "01/01/2030", "10:00"), &alice, now())
        .unwrap();
    bulletin
        .validate_and_create(&fields("Kept", "Agora", "01/01/2030", "10:01"), &alice, now())
        .unwrap();

    // One minute past "Gone": hidden from the board...
    let later = Stamp::parse("01/01/2030", "10:01").unwrap();
    let board = bulletin.list(&agora(), &alice, later).unwrap();
    let names: Vec<&str> = board.iter().map(|e| e.name.as_ref()).collect();
    assert_eq!(names, ["Kept"]);

    // ...but still physically present in storage.
    let contents = fs::read_to_string(temp_dir.path().join(EVENTS_FILE)).unwrap();
    assert!(contents.contains("Gone||"));

    // Sweep removes it for real.
    assert_eq!(bulletin.sweep(later).unwrap(), 1);
    let contents = fs::read_to_string(temp_dir.path().join(EVENTS_FILE)).unwrap();
    assert!(!contents.contains("Gone||"));
    assert!(contents.contains("Kept||"));
}

#[test]
fn sweep_is_idempotent() {
    let (temp_dir, bulletin) = open_bulletin();
    let alice = bulletin.signup("alice1", "pass1").unwrap();

    bulletin
        .validate_and_create(&fields("Past", "Agora", "01/01/2030", "10:00"), &alice, now())
        .unwrap();
    bulletin
        .validate_and_create(&fields("Future", "Agora", "01/01/2031", "10:00"), &alice, now())
        .unwrap();

    let reference = Stamp::parse("01/07/2030", "00:00").unwrap();
    assert_eq!(bulletin.sweep(reference).unwrap(), 1);
    let after_first = fs::read_to_string(temp_dir.path().join(EVENTS_FILE)).unwrap();

    assert_eq!(bulletin.sweep(reference).unwrap(), 0);
    let after_second = fs::read_to_string(temp_dir.path().join(EVENTS_FILE)).unwrap();
    assert_eq!(after_first, after_second);
}

#[test]
fn delete_is_gated_by_ownership() {
    let (temp_dir, bulletin) = open_bulletin();
    let alice = bulletin.signup("alice1", "pass1").unwrap();
    let bob = bulletin.signup("bob2", "pass2").unwrap();

    bulletin
        .validate_and_create(&fields("Talk", "Agora", "01/01/2030", "10:00"), &alice, now())
        .unwrap();

    // A visitor cannot remove anything.
    assert!(matches!(
        bulletin.delete("Talk", &Session::Visitor),
        Err(DeleteError::NotSignedIn)
    ));

    // Another organizer is refused and storage is untouched.
    assert!(matches!(
        bulletin.delete("Talk", &bob),
        Err(DeleteError::NotOwner { .. })
    ));
    let contents = fs::read_to_string(temp_dir.path().join(EVENTS_FILE)).unwrap();
    assert!(contents.contains("Talk||"));

    // An absent name is a silent no-op.
    bulletin.delete("Nothing", &bob).unwrap();

    // The owner succeeds.
    bulletin.delete("Talk", &alice).unwrap();
    let contents = fs::read_to_string(temp_dir.path().join(EVENTS_FILE)).unwrap();
    assert!(!contents.contains("Talk||"));
}

#[test]
fn corrupted_event_line_aborts_reads() {
    let (temp_dir, bulletin) = open_bulletin();
    let alice = bulletin.signup("alice1", "pass1").unwrap();

    bulletin
        .validate_and_create(&fields("Talk", "Agora", "01/01/2030", "10:00"), &alice, now())
        .unwrap();

    let events_path = temp_dir.path().join(EVENTS_FILE);
    let mut contents = fs::read_to_string(&events_path).unwrap();
    contents.push_str("this line has no separators\n");
    fs::write(&events_path, contents).unwrap();

    match bulletin.list(&agora(), &alice, now()) {
        Err(StoreError::Ledger(LedgerError::MalformedRecord { line, .. })) => {
            assert_eq!(line, 2)
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn descriptions_with_newlines_survive_storage() {
    let (_temp_dir, bulletin) = open_bulletin();
    let alice = bulletin.signup("alice1", "pass1").unwrap();

    let mut proposal = fields("Picnic", "Bageshri", "01/05/2031", "09:30");
    proposal.description = "Bring food.\nBring friends.".to_string();
    bulletin.validate_and_create(&proposal, &alice, now()).unwrap();

    let board = bulletin
        .list(&Venue::parse("Bageshri").unwrap(), &alice, now())
        .unwrap();
    assert_eq!(board[0].description.as_ref(), "Bring food.\nBring friends.");
}
