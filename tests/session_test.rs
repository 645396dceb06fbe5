use pretty_assertions::assert_eq;
use timeclock::config::SessionConfig;
use timeclock::report::Summary;
use timeclock::session::{Outcome, Scripted, Session};
use timeclock::RunningTotal;

#[test]
fn two_day_session_matches_documented_run() {
    let settings = SessionConfig::default();
    let answers = ["1:15", "0", "6:32", "0", "1", "6:00", "1", "8:12", "1", "0"];
    let mut out = Vec::new();

    let outcome = Session::new(Scripted::new(answers), &mut out, &settings).run().unwrap();

    assert_eq!(outcome, Outcome::Finished(Summary::new(RunningTotal::new(7, 29), 2)));
    let output = String::from_utf8(out).unwrap();
    assert!(output.starts_with("\nA timeclock app.\n"));
    assert!(output.contains("\nDAY # 1\n"));
    assert!(output.contains("\nDAY # 2\n"));
    assert!(!output.contains("[!]"));
}

#[test]
fn invalid_answers_do_not_discard_earlier_fields() {
    let settings = SessionConfig::default();
    let answers = ["7", "0", "03:60", "3", "x", "1", "maybe", "0"];
    let mut out = Vec::new();

    let outcome = Session::new(Scripted::new(answers), &mut out, &settings).run().unwrap();

    assert_eq!(outcome, Outcome::Finished(Summary::new(RunningTotal::new(8, 0), 1)));
    let output = String::from_utf8(out).unwrap();
    assert_eq!(output.matches("\n[!]Not a valid time format[!]\n").count(), 1);
    assert_eq!(output.matches("\n[!]Invalid choice[!]\n").count(), 2);
}

#[test]
fn empty_input_reports_zero() {
    let settings = SessionConfig::default();
    let mut out = Vec::new();

    let outcome =
        Session::new(Scripted::new(Vec::<String>::new()), &mut out, &settings).run().unwrap();

    assert_eq!(outcome, Outcome::Finished(Summary::new(RunningTotal::default(), 0)));
}
