pub mod contact;
pub mod grade;
pub mod history;
pub mod preferences;
pub mod weather;
