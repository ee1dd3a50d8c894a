pub mod bin_common;
pub mod imghash;
pub mod preprocess;

/// For stand-alone functionality that fit comfortably within one file.
pub mod utils;
