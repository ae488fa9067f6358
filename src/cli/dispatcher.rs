use std::io::Write;

use colored::Colorize;
use log::{debug, error, info};

use crate::cli::command::Command;
use crate::error::{Error, ErrorKind, Result};
use crate::store::{RosterStore, Truncation};
use crate::traits::Confirm;

pub const NO_CLASSROOMS: &str = "No classrooms as of now. Try adding new classrooms with 'add_classroom' command";

/// How a single invocation ended, mapped onto the process exit code by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The command was understood but could not be carried out.
    Failed,
    /// The command line itself was invalid.
    Usage,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Failed => 1,
            Outcome::Usage => 2,
        }
    }
}

/// Writes the user-facing message for `err`, logs it and classifies the failure.
///
/// The message is best effort: if the output cannot be written, the failure is
/// only logged and the classification is still returned.
pub fn report(err: &Error, out: &mut dyn Write) -> Outcome {
    error!("{}", err);

    let outcome = match err.kind() {
        ErrorKind::InvalidInput => Outcome::Usage,
        ErrorKind::NotFound | ErrorKind::AlreadyExists | ErrorKind::InvalidState | ErrorKind::Io => Outcome::Failed,
    };

    let mut written = writeln!(out, "{} {}", "error:".red().bold(), err);
    if outcome == Outcome::Usage {
        written = written.and_then(|()| writeln!(out, "Look up the list of commands with -h argument"));
    }
    if let Err(e) = written {
        error!("Failed to write error report: {}", e);
    }

    outcome
}

/// Executes commands against a [`RosterStore`] it owns for the duration of the run.
pub struct Dispatcher<W: Write> {
    store: RosterStore,
    confirm: Box<dyn Confirm>,
    out: W,
}

impl<W: Write> Dispatcher<W> {
    pub fn new(store: RosterStore, confirm: Box<dyn Confirm>, out: W) -> Self {
        Dispatcher { store, confirm, out }
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    pub fn into_parts(self) -> (RosterStore, W) {
        (self.store, self.out)
    }

    /// Runs `command`, converting every failure into a message on the output.
    pub fn run(&mut self, command: &Command) -> Outcome {
        debug!("Running '{}'", command.name());

        match self.execute(command) {
            Ok(()) => Outcome::Success,
            Err(err) => report(&err, &mut self.out),
        }
    }

    fn execute(&mut self, command: &Command) -> Result<()> {
        match command {
            Command::TruncateData => match self.store.truncate(self.confirm.as_mut())? {
                Truncation::Created => self.say("JSON file created".to_string()),
                Truncation::Overwritten => self.say("Data truncated".to_string()),
                Truncation::Aborted => self.say("Truncation aborted, data left untouched".to_string()),
            },
            Command::AddClassroom { name } => {
                self.store.add_classroom(name)?;
                self.say(format!("Classroom {} added", name))
            }
            Command::RemoveClassroom { name } => {
                self.store.remove_classroom(name)?;
                self.say(format!("Classroom {} removed successfully", name))
            }
            Command::ListClassrooms => {
                let classrooms = self.store.list_classrooms();
                if classrooms.len() == 0 {
                    writeln!(self.out, "{}", NO_CLASSROOMS)?;
                    return Ok(());
                }
                for classroom in classrooms {
                    writeln!(self.out, "{}", classroom)?;
                }
                Ok(())
            }
            Command::AddStudent { student_id, classroom } => {
                let state = self.store.add_student(student_id, classroom)?;
                debug!("Student '{}' starts as {:?}", student_id, state);
                self.say(format!("Student {} has been enrolled in {}", student_id, classroom))
            }
            Command::ListStudents { classroom } => {
                let students = self.store.list_students(classroom)?;
                if students.len() == 0 {
                    writeln!(self.out, "No students enrolled in {}", classroom)?;
                    return Ok(());
                }
                writeln!(self.out, "Classroom name: {}", classroom)?;
                for student in students {
                    writeln!(self.out, "{}", student)?;
                }
                Ok(())
            }
            Command::ListStudentsOverdue { classroom } => {
                let overdue = self.store.list_students_overdue(classroom)?;
                if overdue.is_empty() {
                    writeln!(self.out, "All students in {} have submitted the assignment", classroom)?;
                    return Ok(());
                }
                writeln!(self.out, "Students yet to submit in {}:", classroom)?;
                for student in overdue {
                    writeln!(self.out, "{}", student)?;
                }
                Ok(())
            }
            Command::ScheduleAssignment { classroom, details } => {
                self.store.schedule_assignment(classroom, details)?;
                self.say(format!("Assignment for {} has been scheduled", classroom))
            }
            Command::RemoveAssignment { classroom } => {
                let removed = self.store.remove_assignment(classroom)?;
                debug!("Removed assignment '{}'", removed);
                self.say(format!("Assignment for {} has been removed", classroom))
            }
            Command::ListAssignment { classroom } => {
                let assignment = self.store.list_assignment(classroom)?.unwrap_or("none");
                writeln!(self.out, "Assignment for {}: {}", classroom, assignment)?;
                Ok(())
            }
            Command::SubmitAssignment { student_id, classroom, details } => {
                self.store.submit_assignment(student_id, classroom)?;
                if !details.is_empty() {
                    info!("Submission details from '{}' in '{}': {}", student_id, classroom, details);
                }
                self.say(format!("Assignment submitted by Student {} in {}", student_id, classroom))
            }
        }
    }

    /// Prints a success message and records it in the log.
    fn say(&mut self, message: String) -> Result<()> {
        info!("{}", message);
        writeln!(self.out, "{}", message)?;
        Ok(())
    }
}
