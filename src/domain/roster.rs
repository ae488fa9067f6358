use indexmap::IndexMap;
use indexmap::map::Entry;
use log::debug;

use crate::api::roster_dto::RosterDto;
use crate::domain::classroom::Classroom;
use crate::domain::student::{CompletionState, Student};
use crate::error::{Error, Result};

/// In-memory mapping of classroom names to classrooms.
///
/// All roster rules live here; persisting the result is left to
/// [`crate::store::RosterStore`]. Every mutating method either applies its
/// change completely or returns an error without touching the mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    classrooms: IndexMap<String, Classroom>,
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    pub fn from_dto(dto: RosterDto) -> Self {
        Roster { classrooms: dto.classrooms.into_iter().map(|(name, classroom)| (name, Classroom::from_dto(classroom))).collect() }
    }

    pub fn to_dto(&self) -> RosterDto {
        RosterDto { classrooms: self.classrooms.iter().map(|(name, classroom)| (name.clone(), classroom.to_dto())).collect() }
    }

    pub fn classroom(&self, name: &str) -> Result<&Classroom> {
        self.classrooms.get(name).ok_or_else(|| Error::ClassroomNotFound(name.to_string()))
    }

    fn classroom_mut(&mut self, name: &str) -> Result<&mut Classroom> {
        self.classrooms.get_mut(name).ok_or_else(|| Error::ClassroomNotFound(name.to_string()))
    }

    pub fn student(&self, student_id: &str, classroom_name: &str) -> Result<&Student> {
        self.classroom(classroom_name)?.students.get(student_id).ok_or_else(|| Error::StudentNotFound {
            student: student_id.to_string(),
            classroom: classroom_name.to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.classrooms.clear();
    }

    //--------------------------
    // --- Classroom Methods ---
    //--------------------------
    pub fn add_classroom(&mut self, name: &str) -> Result<()> {
        match self.classrooms.entry(name.to_string()) {
            Entry::Occupied(_) => Err(Error::ClassroomExists(name.to_string())),
            Entry::Vacant(entry) => {
                entry.insert(Classroom::new());
                Ok(())
            }
        }
    }

    /// Removes the classroom, keeping the remaining classrooms in insertion order.
    pub fn remove_classroom(&mut self, name: &str) -> Result<Classroom> {
        self.classrooms.shift_remove(name).ok_or_else(|| Error::ClassroomNotFound(name.to_string()))
    }

    pub fn list_classrooms(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.classrooms.keys().map(String::as_str)
    }

    //------------------------
    // --- Student Methods ---
    //------------------------
    pub fn add_student(&mut self, student_id: &str, classroom_name: &str) -> Result<CompletionState> {
        let classroom = self.classroom_mut(classroom_name)?;
        let state = classroom.enrollment_state();

        match classroom.students.entry(student_id.to_string()) {
            Entry::Occupied(_) => Err(Error::StudentExists { student: student_id.to_string(), classroom: classroom_name.to_string() }),
            Entry::Vacant(entry) => {
                entry.insert(Student::new(state));
                debug!("Student '{}' enrolled in '{}' with state {:?}", student_id, classroom_name, state);
                Ok(state)
            }
        }
    }

    pub fn list_students(&self, classroom_name: &str) -> Result<impl ExactSizeIterator<Item = &str> + '_> {
        Ok(self.classroom(classroom_name)?.students.keys().map(String::as_str))
    }

    /// Students that have not submitted the current assignment.
    ///
    /// An empty result means every enrolled student has submitted; a classroom
    /// without students is reported as [`Error::NoStudents`].
    pub fn list_students_overdue(&self, classroom_name: &str) -> Result<Vec<&str>> {
        let classroom = self.classroom(classroom_name)?;
        if classroom.students.is_empty() {
            return Err(Error::NoStudents(classroom_name.to_string()));
        }

        Ok(classroom
            .students
            .iter()
            .filter(|(_, student)| student.assignment_completed.is_overdue())
            .map(|(id, _)| id.as_str())
            .collect())
    }

    //---------------------------
    // --- Assignment Methods ---
    //---------------------------
    pub fn schedule_assignment(&mut self, classroom_name: &str, details: &str) -> Result<()> {
        let classroom = self.classroom_mut(classroom_name)?;
        classroom.assignment = Some(details.to_string());
        classroom.reset_completion(CompletionState::Pending);
        Ok(())
    }

    pub fn remove_assignment(&mut self, classroom_name: &str) -> Result<String> {
        let classroom = self.classroom_mut(classroom_name)?;
        let removed = classroom.assignment.take().ok_or_else(|| Error::NoAssignment(classroom_name.to_string()))?;
        classroom.reset_completion(CompletionState::Unset);
        Ok(removed)
    }

    pub fn list_assignment(&self, classroom_name: &str) -> Result<Option<&str>> {
        Ok(self.classroom(classroom_name)?.assignment.as_deref())
    }

    /// Moves a student from `Pending` to `Submitted`.
    ///
    /// Submitting from `Unset` or `Submitted` is rejected and leaves the state unchanged.
    pub fn submit_assignment(&mut self, student_id: &str, classroom_name: &str) -> Result<()> {
        let classroom = self.classroom_mut(classroom_name)?;
        let student = classroom.students.get_mut(student_id).ok_or_else(|| Error::StudentNotFound {
            student: student_id.to_string(),
            classroom: classroom_name.to_string(),
        })?;

        match student.assignment_completed {
            CompletionState::Unset => Err(Error::NotYetAssigned(classroom_name.to_string())),
            CompletionState::Submitted => {
                Err(Error::AlreadySubmitted { student: student_id.to_string(), classroom: classroom_name.to_string() })
            }
            CompletionState::Pending => {
                student.assignment_completed = CompletionState::Submitted;
                Ok(())
            }
        }
    }
}
