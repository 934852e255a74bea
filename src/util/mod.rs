#![warn(missing_docs)]

pub mod panic;
pub mod result;
#[cfg(test)]
pub mod track;
