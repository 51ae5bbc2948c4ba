//! Application services

mod announcement_service;
mod formatter;

pub use announcement_service::AnnouncementService;
pub use formatter::format_announcement;
