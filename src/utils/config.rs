//! Limits for tunable values.

use std::cmp;

//------------ DefMinMax -----------------------------------------------------

/// The default, minimum, and maximum values for a config variable.
#[derive(Clone, Copy, Debug)]
pub struct DefMinMax<T> {
    /// The default value,
    def: T,

    /// The minimum value,
    min: T,

    /// The maximum value,
    max: T,
}

impl<T> DefMinMax<T> {
    /// Creates a new value.
    pub const fn new(def: T, min: T, max: T) -> Self {
        Self { def, min, max }
    }

    /// Returns the default value.
    pub fn default(self) -> T {
        self.def
    }

    /// Trims the given value to fit into the minimum/maximum range.
    pub fn limit(self, value: T) -> T
    where
        T: Ord,
    {
        cmp::max(self.min, cmp::min(self.max, value))
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn limit() {
        const SIZE: DefMinMax<u16> = DefMinMax::new(1232, 512, 4096);
        assert_eq!(SIZE.default(), 1232);
        assert_eq!(SIZE.limit(100), 512);
        assert_eq!(SIZE.limit(2000), 2000);
        assert_eq!(SIZE.limit(65535), 4096);
    }
}
