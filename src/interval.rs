use crate::common::INFINITY;

/// Closed range of ray parameters (or channel values).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Open-ended range of ray parameters starting at `min`.
    pub const fn starting_at(min: f64) -> Self {
        Self::new(min, INFINITY)
    }

    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Strict containment; hit tests accept a root only when this holds.
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    pub const EMPTY: Self = Self {
        min: INFINITY,
        max: -INFINITY,
    };

    pub const UNIVERSE: Self = Self {
        min: -INFINITY,
        max: INFINITY,
    };

    pub fn clamp(&self, x: f64) -> f64 {
        x.max(self.min).min(self.max)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: f64 = 0.001;

    #[test]
    fn test_surrounds_is_strict() {
        let i = Interval::new(0.001, 10.0);
        assert!(i.surrounds(5.0));
        assert!(!i.surrounds(0.001));
        assert!(!i.surrounds(10.0));
        assert!(i.contains(10.0));
        assert_eq!(Interval::starting_at(T).max, INFINITY);
        assert!(Interval::starting_at(T).surrounds(1e300));
    }

    #[test]
    fn test_clamp() {
        let i = Interval::new(0.0, 0.999);
        assert_eq!(i.clamp(-1.0), 0.0);
        assert_eq!(i.clamp(2.0), 0.999);
        assert_eq!(i.clamp(0.5), 0.5);
    }

    #[test]
    fn test_empty_and_universe() {
        assert!(Interval::EMPTY.size() < 0.0);
        assert!(!Interval::EMPTY.contains(0.0));
        assert!(Interval::UNIVERSE.surrounds(1e300));
        assert_eq!(Interval::default(), Interval::EMPTY);
    }
}
