//! Weight-based delivery classes.

use serde::{Deserialize, Serialize};

/// A weight-based parcel bucket.
///
/// Every parcel falls into exactly one class by weight: A = (0, 2] kg,
/// B = (2, 10] kg, C = (10, ∞) kg. Ordering follows the band order, so
/// `A < B < C` and `C` is the heaviest.
///
/// # Examples
///
/// ```
/// use u_fleet::models::DeliveryClass;
///
/// assert_eq!(DeliveryClass::A.band(), (0.0, Some(2.0)));
/// assert_eq!(DeliveryClass::C.band(), (10.0, None));
/// assert!(DeliveryClass::A < DeliveryClass::C);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DeliveryClass {
    /// Light parcels, (0, 2] kg.
    A,
    /// Medium parcels, (2, 10] kg.
    B,
    /// Heavy parcels, (10, ∞) kg.
    C,
}

impl DeliveryClass {
    /// All classes in band order, lightest first.
    pub const ALL: [DeliveryClass; 3] = [DeliveryClass::A, DeliveryClass::B, DeliveryClass::C];

    /// All classes in cascade priority order, heaviest first.
    ///
    /// The cascading assignment strategy places heavy classes before light
    /// ones, so class C volume is committed before B, and B before A.
    pub const CASCADE_ORDER: [DeliveryClass; 3] =
        [DeliveryClass::C, DeliveryClass::B, DeliveryClass::A];

    /// The weight band `(lower, upper]` in kg.
    ///
    /// `None` means the band is open-ended above; an explicit cap on class C
    /// is a classifier concern, not part of the class itself.
    pub fn band(&self) -> (f64, Option<f64>) {
        match self {
            DeliveryClass::A => (0.0, Some(2.0)),
            DeliveryClass::B => (2.0, Some(10.0)),
            DeliveryClass::C => (10.0, None),
        }
    }
}

impl core::fmt::Display for DeliveryClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DeliveryClass::A => write!(f, "A"),
            DeliveryClass::B => write!(f, "B"),
            DeliveryClass::C => write!(f, "C"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_order() {
        assert!(DeliveryClass::A < DeliveryClass::B);
        assert!(DeliveryClass::B < DeliveryClass::C);
        assert_eq!(DeliveryClass::CASCADE_ORDER[0], DeliveryClass::C);
        assert_eq!(DeliveryClass::CASCADE_ORDER[2], DeliveryClass::A);
    }

    #[test]
    fn test_bands_are_contiguous() {
        let (_, a_hi) = DeliveryClass::A.band();
        let (b_lo, b_hi) = DeliveryClass::B.band();
        let (c_lo, c_hi) = DeliveryClass::C.band();
        assert_eq!(a_hi, Some(b_lo));
        assert_eq!(b_hi, Some(c_lo));
        assert_eq!(c_hi, None);
    }

    #[test]
    fn test_display() {
        assert_eq!(DeliveryClass::B.to_string(), "B");
    }
}
