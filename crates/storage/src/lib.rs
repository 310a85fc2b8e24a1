#![forbid(unsafe_code)]

pub mod mock;
pub mod repository;
