pub mod init;
pub mod stories;
