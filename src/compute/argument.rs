//! The read-only view of a function argument used during inference.

use crate::store::{Level, MeasureType};

/// What inference needs to know about one argument of a call.
pub trait Argument {
    fn measure_type(&self) -> MeasureType;
    fn has_levels(&self) -> bool;
    /// Levels in source order.
    fn levels(&self) -> &[Level];
}

impl<T: Argument + ?Sized> Argument for &T {
    fn measure_type(&self) -> MeasureType {
        (**self).measure_type()
    }

    fn has_levels(&self) -> bool {
        (**self).has_levels()
    }

    fn levels(&self) -> &[Level] {
        (**self).levels()
    }
}

impl<T: Argument + ?Sized> Argument for Box<T> {
    fn measure_type(&self) -> MeasureType {
        (**self).measure_type()
    }

    fn has_levels(&self) -> bool {
        (**self).has_levels()
    }

    fn levels(&self) -> &[Level] {
        (**self).levels()
    }
}

/// Bare classifications carry no levels, which is handy for literals.
impl Argument for MeasureType {
    fn measure_type(&self) -> MeasureType {
        *self
    }

    fn has_levels(&self) -> bool {
        false
    }

    fn levels(&self) -> &[Level] {
        &[]
    }
}
