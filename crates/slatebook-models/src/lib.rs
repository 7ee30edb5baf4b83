//! # Slatebook Models
//!
//! Domain models and DTOs for the Slatebook school portal.
//!
//! This crate provides every data structure persisted in the portal document
//! or exchanged with the dashboards: entities, partial-update types, DTOs
//! with validation, typed ids, the class/subject catalog, and the per-tab
//! session identity.
//!
//! # Modules
//!
//! - [`ids`]: strongly-typed id newtypes per entity
//! - [`students`], [`teachers`], [`parents`]: people
//! - [`resources`]: lesson notes, videos, assessments
//! - [`results`]: published subject results
//! - [`gallery`], [`payments`], [`announcements`]: the remaining collections
//! - [`settings`]: the settings singleton and partial updates
//! - [`catalog`]: fixed class list, subject list, class→subjects derivation
//! - [`session`]: logged-in user identity (consumed by dashboards, not the
//!   store)

pub mod announcements;
pub mod catalog;
pub mod gallery;
pub mod ids;
pub mod parents;
pub mod payments;
pub mod resources;
pub mod results;
pub mod session;
pub mod settings;
pub mod students;
pub mod teachers;

// Re-export commonly used types at crate root for convenience
pub use announcements::Announcement;
pub use gallery::GalleryItem;
pub use ids::{
    AnnouncementId, AssessmentId, GalleryItemId, LessonNoteId, ParentId, PaymentId, ResultId,
    StudentId, TeacherId, VideoId,
};
pub use parents::{Parent, RegisterParentDto};
pub use payments::{Payment, PaymentStatus};
pub use resources::{Assessment, LessonNote, Video};
pub use results::SubjectResult;
pub use session::{Session, UserRole};
pub use settings::{BankAccount, Settings, SettingsUpdate};
pub use students::{RegisterStudentDto, Student, StudentUpdate};
pub use teachers::{RegisterTeacherDto, Teacher, TeacherUpdate};
