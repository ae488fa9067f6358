pub mod classroom;
pub mod roster;
pub mod student;
