//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod achievement_repo;
pub mod announcement_repo;
pub mod blog_repo;
pub mod committee_repo;
pub mod event_repo;
pub mod seminar_repo;
pub mod site_visit_repo;
pub mod upcoming_event_repo;
pub mod webinar_repo;

pub use achievement_repo::AchievementRepo;
pub use announcement_repo::AnnouncementRepo;
pub use blog_repo::BlogRepo;
pub use committee_repo::CommitteeRepo;
pub use event_repo::EventRepo;
pub use seminar_repo::SeminarRepo;
pub use site_visit_repo::SiteVisitRepo;
pub use upcoming_event_repo::UpcomingEventRepo;
pub use webinar_repo::WebinarRepo;
