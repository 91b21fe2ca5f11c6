pub mod init;
pub mod reset;
pub mod summary;
pub mod total;
pub mod track;
