pub mod backup;
pub mod config;
pub mod contact;
pub mod db;
pub mod grades;
pub mod init;
pub mod log;
pub mod weather;
