pub mod detect;
pub mod summary;
