// src/storage/mod.rs

//! Flat-file persistence. Each store keeps its collection in memory and
//! rewrites the whole JSON snapshot after every mutation.

pub mod json_file;
pub mod question_store;
pub mod result_store;
