pub mod common;
pub mod scan_project;
pub mod scan_repository;
