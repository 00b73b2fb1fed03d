//! Per-class delivery demand.

use serde::{Deserialize, Serialize};

use super::DeliveryClass;
use crate::error::ConfigurationError;

/// Demand for a single delivery class: parcel count and summed weight.
///
/// # Examples
///
/// ```
/// use u_fleet::models::ClassDemand;
///
/// let d = ClassDemand::new(100, 1044.0).unwrap();
/// assert_eq!(d.count(), 100);
/// assert_eq!(d.total_weight(), 1044.0);
/// assert!(ClassDemand::new(1, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassDemand {
    count: u32,
    total_weight: f64,
}

impl ClassDemand {
    /// Creates class demand from a parcel count and total weight in kg.
    ///
    /// The weight must be finite and non-negative.
    pub fn new(count: u32, total_weight: f64) -> Result<Self, ConfigurationError> {
        if !total_weight.is_finite() || total_weight < 0.0 {
            return Err(ConfigurationError::InvalidDemandWeight {
                weight: total_weight,
            });
        }
        Ok(Self {
            count,
            total_weight,
        })
    }

    /// Demand of zero parcels.
    pub fn zero() -> Self {
        Self {
            count: 0,
            total_weight: 0.0,
        }
    }

    /// Number of parcels.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Summed parcel weight in kg.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Returns `true` if there is nothing to deliver in this class.
    pub fn is_zero(&self) -> bool {
        self.count == 0 && self.total_weight == 0.0
    }
}

/// Demand across all three delivery classes for one day.
///
/// # Examples
///
/// ```
/// use u_fleet::models::{ClassDemand, Demand, DeliveryClass};
///
/// let demand = Demand::new(
///     ClassDemand::new(80, 153.0).unwrap(),
///     ClassDemand::new(100, 1044.0).unwrap(),
///     ClassDemand::new(10, 930.0).unwrap(),
/// );
/// assert_eq!(demand.class(DeliveryClass::B).count(), 100);
/// assert_eq!(demand.total_count(), 190);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Demand {
    a: ClassDemand,
    b: ClassDemand,
    c: ClassDemand,
}

impl Demand {
    /// Creates demand from per-class figures, lightest class first.
    pub fn new(a: ClassDemand, b: ClassDemand, c: ClassDemand) -> Self {
        Self { a, b, c }
    }

    /// Demand of zero parcels in every class.
    pub fn zero() -> Self {
        Self {
            a: ClassDemand::zero(),
            b: ClassDemand::zero(),
            c: ClassDemand::zero(),
        }
    }

    /// Demand for the given class.
    pub fn class(&self, class: DeliveryClass) -> ClassDemand {
        match class {
            DeliveryClass::A => self.a,
            DeliveryClass::B => self.b,
            DeliveryClass::C => self.c,
        }
    }

    /// Total parcel count across all classes.
    pub fn total_count(&self) -> u32 {
        self.a.count() + self.b.count() + self.c.count()
    }

    /// Total weight across all classes in kg.
    pub fn total_weight(&self) -> f64 {
        self.a.total_weight() + self.b.total_weight() + self.c.total_weight()
    }

    /// Returns `true` if every class has zero demand.
    pub fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero() && self.c.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_demand_validation() {
        assert!(ClassDemand::new(5, 10.0).is_ok());
        assert!(ClassDemand::new(0, 0.0).is_ok());
        assert!(matches!(
            ClassDemand::new(5, -1.0),
            Err(ConfigurationError::InvalidDemandWeight { .. })
        ));
        assert!(ClassDemand::new(5, f64::INFINITY).is_err());
    }

    #[test]
    fn test_demand_accessors() {
        let demand = Demand::new(
            ClassDemand::new(1, 1.5).unwrap(),
            ClassDemand::new(2, 12.0).unwrap(),
            ClassDemand::new(3, 45.0).unwrap(),
        );
        assert_eq!(demand.class(DeliveryClass::A).count(), 1);
        assert_eq!(demand.class(DeliveryClass::C).total_weight(), 45.0);
        assert_eq!(demand.total_count(), 6);
        assert!((demand.total_weight() - 58.5).abs() < 1e-10);
        assert!(!demand.is_zero());
    }

    #[test]
    fn test_demand_zero() {
        let demand = Demand::zero();
        assert!(demand.is_zero());
        assert_eq!(demand.total_count(), 0);
        for class in DeliveryClass::ALL {
            assert!(demand.class(class).is_zero());
        }
    }
}
