//! Import/export boundaries: CSV record dumps and JSON run files.

pub mod export;
pub mod sim_file;
