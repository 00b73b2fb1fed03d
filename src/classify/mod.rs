//! Delivery classifier: raw parcel weights → per-class demand.
//!
//! Buckets each weight into class A (0–2 kg], B (2–10 kg], or C (>10 kg),
//! producing per-class counts and summed weights. Weights outside every
//! band are collected in [`Classification::rejected`], never silently
//! dropped.

use serde::{Deserialize, Serialize};

use crate::models::{ClassDemand, Demand, DeliveryClass};

/// Buckets parcel weights into delivery classes.
///
/// Class C is open-ended by default; callers that enforce a maximum parcel
/// weight make it explicit with [`with_class_c_limit`](Self::with_class_c_limit).
///
/// # Examples
///
/// ```
/// use u_fleet::classify::Classifier;
/// use u_fleet::models::DeliveryClass;
///
/// let classifier = Classifier::new().with_class_c_limit(200.0);
/// let result = classifier.classify(&[1.5, 2.0, 7.0, 50.0, 250.0, -3.0]);
///
/// let demand = result.demand;
/// assert_eq!(demand.class(DeliveryClass::A).count(), 2); // 1.5, 2.0
/// assert_eq!(demand.class(DeliveryClass::B).count(), 1); // 7.0
/// assert_eq!(demand.class(DeliveryClass::C).count(), 1); // 50.0
/// assert_eq!(result.rejected, vec![250.0, -3.0]);
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Classifier {
    class_c_limit: Option<f64>,
}

/// Output of [`Classifier::classify`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Per-class counts and summed weights.
    pub demand: Demand,
    /// Weights that fell outside every band: non-finite, non-positive, or
    /// above the class C limit when one is set. Order of appearance.
    pub rejected: Vec<f64>,
}

impl Classifier {
    /// A classifier with the open-ended class C band.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps class C at the given weight in kg; heavier parcels are rejected.
    pub fn with_class_c_limit(mut self, limit: f64) -> Self {
        self.class_c_limit = Some(limit);
        self
    }

    /// Upper bound on class C, if set.
    pub fn class_c_limit(&self) -> Option<f64> {
        self.class_c_limit
    }

    /// Buckets the given weights into per-class demand.
    pub fn classify(&self, weights: &[f64]) -> Classification {
        let mut counts = [0u32; 3];
        let mut sums = [0.0f64; 3];
        let mut rejected = Vec::new();

        for &w in weights {
            match self.class_of(w) {
                Some(class) => {
                    let i = class as usize;
                    counts[i] += 1;
                    sums[i] += w;
                }
                None => rejected.push(w),
            }
        }

        // Weights were pre-screened, so ClassDemand construction cannot fail.
        let demand = Demand::new(
            ClassDemand::new(counts[0], sums[0]).unwrap_or_else(|_| ClassDemand::zero()),
            ClassDemand::new(counts[1], sums[1]).unwrap_or_else(|_| ClassDemand::zero()),
            ClassDemand::new(counts[2], sums[2]).unwrap_or_else(|_| ClassDemand::zero()),
        );
        Classification { demand, rejected }
    }

    /// The class a single weight falls into, or `None` if out of band.
    pub fn class_of(&self, weight: f64) -> Option<DeliveryClass> {
        if !weight.is_finite() || weight <= 0.0 {
            return None;
        }
        for class in DeliveryClass::ALL {
            let (lower, upper) = class.band();
            let upper = match (class, upper) {
                (DeliveryClass::C, None) => self.class_c_limit,
                (_, upper) => upper,
            };
            let within_upper = upper.map_or(true, |u| weight <= u);
            if weight > lower && within_upper {
                return Some(class);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_band_boundaries() {
        let c = Classifier::new();
        assert_eq!(c.class_of(0.5), Some(DeliveryClass::A));
        assert_eq!(c.class_of(2.0), Some(DeliveryClass::A));
        assert_eq!(c.class_of(2.0001), Some(DeliveryClass::B));
        assert_eq!(c.class_of(10.0), Some(DeliveryClass::B));
        assert_eq!(c.class_of(10.5), Some(DeliveryClass::C));
        assert_eq!(c.class_of(5000.0), Some(DeliveryClass::C));
        assert_eq!(c.class_of(0.0), None);
        assert_eq!(c.class_of(-1.0), None);
        assert_eq!(c.class_of(f64::NAN), None);
    }

    #[test]
    fn test_class_c_limit() {
        let c = Classifier::new().with_class_c_limit(200.0);
        assert_eq!(c.class_of(200.0), Some(DeliveryClass::C));
        assert_eq!(c.class_of(200.5), None);
    }

    #[test]
    fn test_classify_sums_weights() {
        let c = Classifier::new();
        let result = c.classify(&[1.0, 1.5, 3.0, 4.0, 20.0]);
        let a = result.demand.class(DeliveryClass::A);
        let b = result.demand.class(DeliveryClass::B);
        let heavy = result.demand.class(DeliveryClass::C);
        assert_eq!(a.count(), 2);
        assert!((a.total_weight() - 2.5).abs() < 1e-10);
        assert_eq!(b.count(), 2);
        assert!((b.total_weight() - 7.0).abs() < 1e-10);
        assert_eq!(heavy.count(), 1);
        assert!((heavy.total_weight() - 20.0).abs() < 1e-10);
        assert!(result.rejected.is_empty());
    }

    #[test]
    fn test_classify_empty() {
        let result = Classifier::new().classify(&[]);
        assert!(result.demand.is_zero());
        assert!(result.rejected.is_empty());
    }

    proptest! {
        /// Every weight lands in exactly one band or is rejected, and the
        /// per-class counts plus rejections partition the input.
        #[test]
        fn prop_classification_partitions_input(
            weights in proptest::collection::vec(-10.0f64..300.0, 0..200),
            cap in proptest::option::of(50.0f64..250.0),
        ) {
            let mut classifier = Classifier::new();
            if let Some(limit) = cap {
                classifier = classifier.with_class_c_limit(limit);
            }
            let result = classifier.classify(&weights);

            let classified: u32 = DeliveryClass::ALL
                .iter()
                .map(|&c| result.demand.class(c).count())
                .sum();
            prop_assert_eq!(classified as usize + result.rejected.len(), weights.len());

            for &w in &weights {
                let matches: Vec<DeliveryClass> = DeliveryClass::ALL
                    .iter()
                    .copied()
                    .filter(|&c| classifier.class_of(w) == Some(c))
                    .collect();
                prop_assert!(matches.len() <= 1);
            }
        }

        /// Per-class weight sums equal the sum of member weights.
        #[test]
        fn prop_class_weight_sums(
            weights in proptest::collection::vec(0.1f64..40.0, 1..100),
        ) {
            let classifier = Classifier::new();
            let result = classifier.classify(&weights);
            for class in DeliveryClass::ALL {
                let expected: f64 = weights
                    .iter()
                    .filter(|&&w| classifier.class_of(w) == Some(class))
                    .sum();
                let got = result.demand.class(class).total_weight();
                prop_assert!((got - expected).abs() < 1e-9);
            }
        }
    }
}
