use rollcall_core::time::parse_local_timestamp;
use rollcall_store::{paths, RegisterOutcome, Roster, ROSTER_HEADER};
use std::fs;
use tempfile::TempDir;

fn roster_in_temp(temp: &TempDir) -> Roster {
    Roster::open(paths::roster_path_in(temp.path()))
}

fn file_lines(roster: &Roster) -> Vec<String> {
    fs::read_to_string(roster.path())
        .expect("read roster")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn missing_file_has_no_registrations() {
    let temp = TempDir::new().expect("temp dir");
    let roster = roster_in_temp(&temp);

    assert!(!roster.is_registered("ada@example.com").expect("check"));
    assert!(roster.entries().expect("entries").is_empty());
    assert!(!roster.path().exists());
}

#[test]
fn first_append_writes_header_then_record() {
    let temp = TempDir::new().expect("temp dir");
    let roster = roster_in_temp(&temp);
    let now = 1_700_000_000;

    let registration = roster.append(now, "a@b.co").expect("append");
    assert_eq!(registration.email, "a@b.co");
    assert_eq!(registration.registered_at, now);

    let lines = file_lines(&roster);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], ROSTER_HEADER);
    assert!(lines[1].ends_with(",a@b.co"));

    let timestamp = lines[1].split(',').next().expect("timestamp field");
    assert_eq!(parse_local_timestamp(timestamp).expect("parse"), now);
}

#[test]
fn register_skips_case_insensitive_duplicates() {
    let temp = TempDir::new().expect("temp dir");
    let roster = roster_in_temp(&temp);
    let now = 1_700_000_000;

    let first = roster.register(now, "user@example.com").expect("register");
    assert!(matches!(first, RegisterOutcome::Registered(_)));

    // a fresh Roster models a second process run against the same file
    let second = Roster::open(roster.path())
        .register(now + 60, "USER@EXAMPLE.COM")
        .expect("register again");
    assert_eq!(second, RegisterOutcome::AlreadyRegistered);

    assert_eq!(file_lines(&roster).len(), 2);
}

#[test]
fn registration_scenario_grows_one_line_per_new_address() {
    let temp = TempDir::new().expect("temp dir");
    let roster = roster_in_temp(&temp);
    let now = 1_700_000_000;

    roster.register(now, "x@y.com").expect("register x");
    assert_eq!(file_lines(&roster).len(), 2);

    roster.register(now + 1, "x@y.com").expect("register x again");
    assert_eq!(file_lines(&roster).len(), 2);

    roster.register(now + 2, "z@y.com").expect("register z");
    assert_eq!(file_lines(&roster).len(), 3);
}

#[test]
fn duplicate_check_trims_the_stored_field() {
    let temp = TempDir::new().expect("temp dir");
    let roster = roster_in_temp(&temp);
    fs::write(
        roster.path(),
        "Timestamp,Email\n2026-02-03 09:15:00,  ada@example.com  \n",
    )
    .expect("seed roster");

    assert!(roster.is_registered("Ada@Example.com").expect("check"));
}

#[test]
fn malformed_rows_never_match_and_never_fail() {
    let temp = TempDir::new().expect("temp dir");
    let roster = roster_in_temp(&temp);
    fs::write(
        roster.path(),
        "Timestamp,Email\nno-comma-in-this-row\n2026-02-03 09:15:00,ada@example.com\n",
    )
    .expect("seed roster");

    assert!(roster.is_registered("ada@example.com").expect("check"));
    assert!(!roster.is_registered("no-comma-in-this-row").expect("check"));

    let entries = roster.entries().expect("entries");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].email, "ada@example.com");
}

#[test]
fn entries_skip_rows_with_unparseable_timestamps() {
    let temp = TempDir::new().expect("temp dir");
    let roster = roster_in_temp(&temp);
    fs::write(
        roster.path(),
        "Timestamp,Email\nnot-a-time,ghost@example.com\n2026-02-03 09:15:00,ada@example.com\n",
    )
    .expect("seed roster");

    let entries = roster.entries().expect("entries");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].email, "ada@example.com");

    // the malformed row still counts for duplicate detection
    assert!(roster.is_registered("ghost@example.com").expect("check"));
}

#[test]
fn extra_fields_compare_on_the_second_field_only() {
    let temp = TempDir::new().expect("temp dir");
    let roster = roster_in_temp(&temp);
    fs::write(
        roster.path(),
        "Timestamp,Email\n2026-02-03 09:15:00,ada@example.com,stray-field\n",
    )
    .expect("seed roster");

    assert!(roster.is_registered("ada@example.com").expect("check"));
    assert!(!roster.is_registered("stray-field").expect("check"));
}
