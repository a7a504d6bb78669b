mod text_utils;

pub use text_utils::{non_empty, non_empty_opt};
