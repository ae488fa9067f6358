use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::api::roster_dto::RosterDto;
use crate::config::Config;
use crate::domain::roster::Roster;
use crate::domain::student::CompletionState;
use crate::error::Result;
use crate::loader::parser::{parse_json_file, write_json_file};
use crate::traits::Confirm;

/// Outcome of [`RosterStore::truncate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncation {
    /// No data file existed; a fresh empty one was written.
    Created,
    /// The existing data file was overwritten with an empty roster.
    Overwritten,
    /// The user declined; memory and file are untouched.
    Aborted,
}

/// A [`Roster`] bound to the JSON document it is persisted in.
///
/// Every mutating method writes the whole document after the in-memory
/// change succeeds. Failed commands never write.
#[derive(Debug)]
pub struct RosterStore {
    path: PathBuf,
    roster: Roster,
    /// The data file holds nothing but the empty document written by
    /// [`RosterStore::load`].
    created: bool,
}

impl RosterStore {
    /// Loads the roster from `config.data_path`, creating an empty document if
    /// the file does not exist yet.
    pub fn load(config: &Config) -> Result<Self> {
        let path = config.data_path.clone();

        if !path.exists() {
            info!("Creating data file '{}'", path.display());
            let store = RosterStore { path, roster: Roster::new(), created: true };
            store.save()?;
            return Ok(store);
        }

        let dto: RosterDto = parse_json_file(&path)?;
        debug!("Loaded {} classrooms from '{}'", dto.classrooms.len(), path.display());

        Ok(RosterStore { path, roster: Roster::from_dto(dto), created: false })
    }

    /// Overwrites the data file with the full in-memory roster.
    pub fn save(&self) -> Result<()> {
        write_json_file(&self.path, &self.roster.to_dto())
    }

    /// Empties the roster. A data file that predates this store is only
    /// overwritten after `confirm` agrees.
    pub fn truncate(&mut self, confirm: &mut dyn Confirm) -> Result<Truncation> {
        let existed = self.path.exists() && !self.created;

        if existed && !confirm.confirm("File already exists. Do you want to overwrite")? {
            info!("Truncation of '{}' aborted", self.path.display());
            return Ok(Truncation::Aborted);
        }

        self.roster.clear();
        self.persist()?;

        Ok(if existed { Truncation::Overwritten } else { Truncation::Created })
    }

    fn persist(&mut self) -> Result<()> {
        self.created = false;
        self.save()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    //---------------------------
    // --- Persisting Methods ---
    //---------------------------
    pub fn add_classroom(&mut self, name: &str) -> Result<()> {
        self.roster.add_classroom(name)?;
        self.persist()
    }

    pub fn remove_classroom(&mut self, name: &str) -> Result<()> {
        self.roster.remove_classroom(name)?;
        self.persist()
    }

    pub fn add_student(&mut self, student_id: &str, classroom_name: &str) -> Result<CompletionState> {
        let state = self.roster.add_student(student_id, classroom_name)?;
        self.persist()?;
        Ok(state)
    }

    pub fn schedule_assignment(&mut self, classroom_name: &str, details: &str) -> Result<()> {
        self.roster.schedule_assignment(classroom_name, details)?;
        self.persist()
    }

    pub fn remove_assignment(&mut self, classroom_name: &str) -> Result<String> {
        let removed = self.roster.remove_assignment(classroom_name)?;
        self.persist()?;
        Ok(removed)
    }

    pub fn submit_assignment(&mut self, student_id: &str, classroom_name: &str) -> Result<()> {
        self.roster.submit_assignment(student_id, classroom_name)?;
        self.persist()
    }

    //-----------------------
    // --- Query Methods ---
    //-----------------------
    pub fn list_classrooms(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.roster.list_classrooms()
    }

    pub fn list_students(&self, classroom_name: &str) -> Result<impl ExactSizeIterator<Item = &str> + '_> {
        self.roster.list_students(classroom_name)
    }

    pub fn list_students_overdue(&self, classroom_name: &str) -> Result<Vec<&str>> {
        self.roster.list_students_overdue(classroom_name)
    }

    pub fn list_assignment(&self, classroom_name: &str) -> Result<Option<&str>> {
        self.roster.list_assignment(classroom_name)
    }
}
