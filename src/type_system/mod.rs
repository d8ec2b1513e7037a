//! Inference of a computed column's measure type and levels.
//!
//! Both rules are pure functions of a descriptor and its arguments. They are
//! reached through `FunctionDescriptor::resolve_type` and
//! `FunctionDescriptor::resolve_levels`, so the level rule's type gate always
//! runs against the same descriptor as the caller.

pub use self::error::MetaError;
pub use self::rules::levels::LevelUsage;
pub use self::rules::measure::{step, Step};

mod error;
pub(crate) mod rules {
    pub mod levels;
    pub mod measure;
}
