//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (where the entity is created
//!   through the API)

pub mod achievement;
pub mod announcement;
pub mod blog;
pub mod committee;
pub mod event;
pub mod seminar;
pub mod site_visit;
pub mod upcoming_event;
pub mod webinar;
