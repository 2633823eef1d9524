pub mod build;
pub mod init;
pub mod schema;
pub mod validate;
