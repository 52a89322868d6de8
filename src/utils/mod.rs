mod glob;

pub(crate) use glob::is_glob;
pub use glob::expand_glob;
