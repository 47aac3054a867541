//! Storage bucket names, one per upload-backed content type.

pub const ANNOUNCEMENT: &str = "announcement";
pub const EVENTS: &str = "events";
pub const SEMINARS: &str = "seminars";
pub const SITE_VISITS: &str = "site-visits";
pub const WEBINAR: &str = "webinar";
