pub mod args_helper;
pub mod blur;
pub mod dedup;
pub mod frame_source;
pub mod preproc;
