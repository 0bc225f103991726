//! Booking Module
//!
//! Wire-level representations of the booking domain, as exchanged with
//! clients over the JSON API:
//!
//! - `SessionDto` - A yoga session and its participant ids
//! - `TeacherDto` - A teacher
//! - `UserDto` - A user profile (never carries the password hash)
//!
//! Field names are camelCase on the wire, except the
//! session's `teacher_id`.

pub mod session;
pub mod teacher;
pub mod user;

pub use session::SessionDto;
pub use teacher::TeacherDto;
pub use user::UserDto;
