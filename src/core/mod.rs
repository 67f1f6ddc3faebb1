pub mod backup;
pub mod config;
pub mod confirm;
pub mod contacts;
pub mod display;
pub mod grade_session;
pub mod grades;
pub mod log;
pub mod validation;
pub mod weather;
