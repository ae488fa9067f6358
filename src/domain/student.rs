use crate::api::roster_dto::StudentDto;

/// Lifecycle of a student's work on the classroom's current assignment.
///
/// Persisted as `assignment_completed`:
/// - `Unset` as `null`: nothing has been assigned since the student enrolled
///   (or the assignment was removed).
/// - `Pending` as `false`: an assignment is outstanding.
/// - `Submitted` as `true`: the assignment has been handed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionState {
    #[default]
    Unset,
    Pending,
    Submitted,
}

impl CompletionState {
    /// Anything not yet handed in counts as overdue, including `Unset`.
    pub fn is_overdue(self) -> bool {
        self != CompletionState::Submitted
    }
}

impl From<Option<bool>> for CompletionState {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => CompletionState::Unset,
            Some(false) => CompletionState::Pending,
            Some(true) => CompletionState::Submitted,
        }
    }
}

impl From<CompletionState> for Option<bool> {
    fn from(state: CompletionState) -> Self {
        match state {
            CompletionState::Unset => None,
            CompletionState::Pending => Some(false),
            CompletionState::Submitted => Some(true),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Student {
    pub assignment_completed: CompletionState,
}

impl Student {
    pub fn new(assignment_completed: CompletionState) -> Self {
        Student { assignment_completed }
    }

    pub fn from_dto(dto: StudentDto) -> Self {
        Student { assignment_completed: dto.assignment_completed.into() }
    }

    pub fn to_dto(&self) -> StudentDto {
        StudentDto { assignment_completed: self.assignment_completed.into() }
    }
}
