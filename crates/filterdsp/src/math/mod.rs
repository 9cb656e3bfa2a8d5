//! Mathematical helpers
pub mod poly;
pub mod special_funs;
