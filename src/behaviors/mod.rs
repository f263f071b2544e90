//! Individual page behaviors.
//!
//! Each module is a set of plain functions over a [`crate::dom::Document`].
//! None of them keeps state between calls except [`flash::FlashMessage`],
//! whose lifecycle the page core advances.

pub mod file_input;
pub mod flash;
pub mod password;
pub mod validate;
pub mod year;
