use assert_cmd::Command;
use predicates::prelude::*;

fn patience() -> Command {
    Command::cargo_bin("patience").expect("binary exists")
}

#[test]
fn standard_deal_then_quit() {
    patience()
        .args(["--deal", "0"])
        .write_stdin("71\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Deal: 0\n"))
        .stdout(predicate::str::contains("Score: 0 || Moves: 0"))
        .stdout(predicate::str::contains("Lane 7: XX XX XX XX XX XX QD"))
        .stdout(predicate::str::contains("revealing KD (+5)"))
        .stdout(predicate::str::contains("Score: 5 || Moves: 1"))
        .stdout(predicate::str::contains("!! Exiting the game."));
}

#[test]
fn bad_input_is_reported_and_play_continues() {
    patience()
        .args(["--deal", "0"])
        .write_stdin("hello\nd\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("!! Invalid command \"hello\""))
        .stdout(predicate::str::contains("Drew card: JD"));
}

#[test]
fn undecodable_line_does_not_end_the_session() {
    let mut input = vec![0xff, 0xfe, b'\n'];
    input.extend_from_slice(b"d\nq\n");
    patience()
        .args(["--deal", "0"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("!! Invalid command"))
        .stdout(predicate::str::contains("Drew card: JD"))
        .stdout(predicate::str::contains("!! Exiting the game."));
}

#[test]
fn json_board_hides_face_down_cards() {
    patience()
        .args(["--deal", "0", "--json"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"draw_pile_remaining\":24"))
        .stdout(predicate::str::contains("\"hidden\""))
        .stdout(predicate::str::contains("\"KD\"").not());
}

#[test]
fn same_seed_same_deal() {
    let first = patience().args(["--seed", "42"]).write_stdin("q\n").output().unwrap();
    let second = patience().args(["--seed", "42"]).write_stdin("q\n").output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn rejects_a_bad_deal_code() {
    patience()
        .args(["--deal", "12ab"])
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --deal value"));
}

#[test]
fn seed_and_deal_conflict() {
    patience()
        .args(["--deal", "0", "--seed", "1"])
        .assert()
        .failure();
}
