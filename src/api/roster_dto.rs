use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root of the persisted `data.json` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterDto {
    pub classrooms: IndexMap<String, ClassroomDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassroomDto {
    pub students: IndexMap<String, StudentDto>,
    pub assignment: Option<String>,
}

/// `assignment_completed` is `null` until an assignment reaches the student.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDto {
    pub assignment_completed: Option<bool>,
}
