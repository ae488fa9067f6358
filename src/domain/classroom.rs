use indexmap::IndexMap;

use crate::api::roster_dto::ClassroomDto;
use crate::domain::student::{CompletionState, Student};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classroom {
    pub students: IndexMap<String, Student>,
    /// Present iff an assignment is currently scheduled.
    pub assignment: Option<String>,
}

impl Classroom {
    pub fn new() -> Self {
        Classroom::default()
    }

    pub fn from_dto(dto: ClassroomDto) -> Self {
        Classroom {
            students: dto.students.into_iter().map(|(id, student)| (id, Student::from_dto(student))).collect(),
            assignment: dto.assignment,
        }
    }

    pub fn to_dto(&self) -> ClassroomDto {
        ClassroomDto {
            students: self.students.iter().map(|(id, student)| (id.clone(), student.to_dto())).collect(),
            assignment: self.assignment.clone(),
        }
    }

    /// State a newly enrolled student starts in.
    pub fn enrollment_state(&self) -> CompletionState {
        if self.assignment.is_some() { CompletionState::Pending } else { CompletionState::Unset }
    }

    pub fn reset_completion(&mut self, state: CompletionState) {
        for student in self.students.values_mut() {
            student.assignment_completed = state;
        }
    }
}
