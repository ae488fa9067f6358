use crate::error::{Error, Result};

/// Command list shown after the option help, in the order commands are documented.
pub const COMMAND_HELP: &str = "\
Commands:
  truncate_data
  add_classroom <Class_Name>
  remove_classroom <Class_Name>
  list_classrooms
  add_student <Student_ID> <Class_Name>
  list_students <Class_Name>
  list_students_overdue <Class_Name>
  schedule_assignment <Class_Name> <Details...>
  remove_assignment <Class_Name>
  list_assignment <Class_Name>
  submit_assignment <Student_ID> <Class_Name> <Details...>";

/// A fully validated command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    TruncateData,
    AddClassroom { name: String },
    RemoveClassroom { name: String },
    ListClassrooms,
    AddStudent { student_id: String, classroom: String },
    ListStudents { classroom: String },
    ListStudentsOverdue { classroom: String },
    ScheduleAssignment { classroom: String, details: String },
    RemoveAssignment { classroom: String },
    ListAssignment { classroom: String },
    SubmitAssignment { student_id: String, classroom: String, details: String },
}

impl Command {
    /// Builds a command from its name and trailing arguments.
    ///
    /// Free-text `<details...>` are joined with single spaces. Arguments past
    /// the ones a command uses are ignored.
    pub fn parse(name: &str, args: &[String]) -> Result<Self> {
        let args = Args { command: name, args };

        let command = match name {
            "truncate_data" => Command::TruncateData,
            "add_classroom" => Command::AddClassroom { name: args.required(0, "Classroom")? },
            "remove_classroom" => Command::RemoveClassroom { name: args.required(0, "Classroom")? },
            "list_classrooms" => Command::ListClassrooms,
            "add_student" => {
                Command::AddStudent { student_id: args.required(0, "Student ID")?, classroom: args.required(1, "Classroom")? }
            }
            "list_students" => Command::ListStudents { classroom: args.required(0, "Classroom")? },
            "list_students_overdue" => Command::ListStudentsOverdue { classroom: args.required(0, "Classroom")? },
            "schedule_assignment" => {
                Command::ScheduleAssignment { classroom: args.required(0, "Classroom")?, details: args.rest(1) }
            }
            "remove_assignment" => Command::RemoveAssignment { classroom: args.required(0, "Classroom")? },
            "list_assignment" => Command::ListAssignment { classroom: args.required(0, "Classroom")? },
            "submit_assignment" => Command::SubmitAssignment {
                student_id: args.required(0, "Student ID")?,
                classroom: args.required(1, "Classroom")?,
                details: args.rest(2),
            },
            _ => return Err(Error::UnknownCommand(name.to_string())),
        };

        Ok(command)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::TruncateData => "truncate_data",
            Command::AddClassroom { .. } => "add_classroom",
            Command::RemoveClassroom { .. } => "remove_classroom",
            Command::ListClassrooms => "list_classrooms",
            Command::AddStudent { .. } => "add_student",
            Command::ListStudents { .. } => "list_students",
            Command::ListStudentsOverdue { .. } => "list_students_overdue",
            Command::ScheduleAssignment { .. } => "schedule_assignment",
            Command::RemoveAssignment { .. } => "remove_assignment",
            Command::ListAssignment { .. } => "list_assignment",
            Command::SubmitAssignment { .. } => "submit_assignment",
        }
    }
}

struct Args<'a> {
    command: &'a str,
    args: &'a [String],
}

impl Args<'_> {
    fn required(&self, index: usize, field: &'static str) -> Result<String> {
        self.args.get(index).cloned().ok_or_else(|| Error::MissingArgument { command: self.command.to_string(), field })
    }

    fn rest(&self, from: usize) -> String {
        self.args.get(from..).unwrap_or_default().join(" ")
    }
}
