pub mod init;
pub mod list;
pub mod open;
pub mod save;
