use classroom_manager::{
    cli::{
        command::Command,
        dispatcher::{Dispatcher, NO_CLASSROOMS, Outcome, report},
    },
    config::Config,
    error::Error,
    store::RosterStore,
    traits::FixedConfirm,
};
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir(prefix: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!(
        "{}-{}",
        prefix,
        SystemTime::now().duration_since(UNIX_EPOCH).expect("clock").as_nanos()
    ));
    std::fs::create_dir_all(&p).expect("create temp dir");
    p
}

fn dispatcher(prefix: &str, confirm: bool) -> Dispatcher<Vec<u8>> {
    let config = Config::new(temp_dir(prefix).join("data.json"));
    let store = RosterStore::load(&config).expect("load store");
    Dispatcher::new(store, Box::new(FixedConfirm(confirm)), Vec::new())
}

fn run(dispatcher: &mut Dispatcher<Vec<u8>>, line: &[&str]) -> Outcome {
    let args: Vec<String> = line[1..].iter().map(|a| a.to_string()).collect();
    let command = Command::parse(line[0], &args).expect("valid command");
    dispatcher.run(&command)
}

fn output(dispatcher: Dispatcher<Vec<u8>>) -> String {
    let (_, out) = dispatcher.into_parts();
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn test_list_classrooms_empty_notice() {
    let mut d = dispatcher("classroom-dispatch-empty", true);

    assert_eq!(run(&mut d, &["list_classrooms"]), Outcome::Success);
    assert_eq!(run(&mut d, &["list_classrooms"]), Outcome::Success);

    let out = output(d);
    assert_eq!(out.matches(NO_CLASSROOMS).count(), 2);
}

#[test]
fn test_classroom_lifecycle_messages() {
    let mut d = dispatcher("classroom-dispatch-lifecycle", true);

    assert_eq!(run(&mut d, &["add_classroom", "Math"]), Outcome::Success);
    assert_eq!(run(&mut d, &["add_classroom", "Art"]), Outcome::Success);
    assert_eq!(run(&mut d, &["list_classrooms"]), Outcome::Success);
    assert_eq!(run(&mut d, &["remove_classroom", "Art"]), Outcome::Success);
    assert_eq!(run(&mut d, &["remove_classroom", "Art"]), Outcome::Failed);

    let out = output(d);
    assert!(out.contains("Classroom Math added\n"));
    assert!(out.contains("Math\nArt\n"));
    assert!(out.contains("Classroom Art removed successfully\n"));
    assert!(out.contains("Classroom Art doesn't exist"));
}

#[test]
fn test_assignment_flow() {
    let mut d = dispatcher("classroom-dispatch-assignment", true);

    run(&mut d, &["add_classroom", "Math"]);
    run(&mut d, &["add_student", "s1", "Math"]);
    run(&mut d, &["add_student", "s2", "Math"]);
    assert_eq!(run(&mut d, &["list_assignment", "Math"]), Outcome::Success);
    assert_eq!(run(&mut d, &["schedule_assignment", "Math", "ch1", "problems"]), Outcome::Success);
    assert_eq!(run(&mut d, &["list_assignment", "Math"]), Outcome::Success);
    assert_eq!(run(&mut d, &["submit_assignment", "s1", "Math", "done"]), Outcome::Success);
    assert_eq!(run(&mut d, &["submit_assignment", "s1", "Math", "done"]), Outcome::Failed);
    assert_eq!(run(&mut d, &["list_students_overdue", "Math"]), Outcome::Success);
    assert_eq!(run(&mut d, &["submit_assignment", "s2", "Math"]), Outcome::Success);
    assert_eq!(run(&mut d, &["list_students_overdue", "Math"]), Outcome::Success);
    assert_eq!(run(&mut d, &["remove_assignment", "Math"]), Outcome::Success);
    assert_eq!(run(&mut d, &["remove_assignment", "Math"]), Outcome::Failed);

    let out = output(d);
    assert!(out.contains("Assignment for Math: none\n"));
    assert!(out.contains("Assignment for Math has been scheduled\n"));
    assert!(out.contains("Assignment for Math: ch1 problems\n"));
    assert!(out.contains("Assignment submitted by Student s1 in Math\n"));
    assert!(out.contains("Assignment already submitted by Student s1 in Math"));
    assert!(out.contains("Students yet to submit in Math:\ns2\n"));
    assert!(out.contains("All students in Math have submitted the assignment\n"));
    assert!(out.contains("No assignment scheduled for Math"));
}

#[test]
fn test_list_students_and_errors() {
    let mut d = dispatcher("classroom-dispatch-students", true);

    run(&mut d, &["add_classroom", "Math"]);
    run(&mut d, &["add_classroom", "Art"]);
    assert_eq!(run(&mut d, &["list_students", "Math"]), Outcome::Success);
    assert_eq!(run(&mut d, &["list_students_overdue", "Math"]), Outcome::Failed);
    run(&mut d, &["add_student", "s1", "Math"]);
    run(&mut d, &["add_student", "s1", "Art"]);
    assert_eq!(run(&mut d, &["add_student", "s1", "Math"]), Outcome::Failed);
    assert_eq!(run(&mut d, &["add_student", "s2", "Gym"]), Outcome::Failed);
    assert_eq!(run(&mut d, &["list_students", "Math"]), Outcome::Success);

    let out = output(d);
    assert!(out.contains("No students enrolled in Math\n"));
    assert!(out.contains("Student s1 has been enrolled in Art\n"));
    assert!(out.contains("Student s1 already enrolled in Math"));
    assert!(out.contains("Classroom Gym doesn't exist"));
    assert!(out.contains("Classroom name: Math\ns1\n"));
}

#[test]
fn test_truncate_respects_answer() {
    let mut declined = dispatcher("classroom-dispatch-decline", false);
    run(&mut declined, &["add_classroom", "Math"]);
    assert_eq!(run(&mut declined, &["truncate_data"]), Outcome::Success);
    assert_eq!(declined.store().list_classrooms().count(), 1);
    assert!(output(declined).contains("Truncation aborted"));

    let mut accepted = dispatcher("classroom-dispatch-accept", true);
    run(&mut accepted, &["add_classroom", "Math"]);
    assert_eq!(run(&mut accepted, &["truncate_data"]), Outcome::Success);
    assert_eq!(accepted.store().list_classrooms().count(), 0);
    assert!(output(accepted).contains("Data truncated"));
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_report_survives_unwritable_output() {
    let usage = Error::UnknownCommand("teleport".to_string());
    assert_eq!(report(&usage, &mut BrokenPipe), Outcome::Usage);

    let missing = Error::ClassroomNotFound("Math".to_string());
    assert_eq!(report(&missing, &mut BrokenPipe), Outcome::Failed);

    let mut out = Vec::new();
    assert_eq!(report(&usage, &mut out), Outcome::Usage);
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Invalid command: teleport"));
    assert!(out.contains("Look up the list of commands with -h argument"));
}
