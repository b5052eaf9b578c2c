pub mod region;
pub mod timeline;
