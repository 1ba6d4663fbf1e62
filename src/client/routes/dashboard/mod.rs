//! Per-role dashboards.
//!
//! Each dashboard loads its data once on mount and re-fetches after every successful
//! save; nothing is shared between dashboards.

pub mod company;
pub mod moderator;
pub mod student;
pub mod university;

pub use company::CompanyDashboard;
pub use moderator::ModeratorDashboard;
pub use student::StudentDashboard;
pub use university::UniversityDashboard;
