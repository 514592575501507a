//! Dimension vectors.
//!
//! A [`Dimensions`] maps unit labels to real exponents. Zero exponents are never stored,
//! so derived equality is exponent-wise equality with absent keys read as zero. Under
//! [`Dimensions::times`] and [`Dimensions::divide`] the vectors form a free abelian
//! group whose identity is the scalar (empty) vector.

use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dimensions(BTreeMap<String, f64>);

impl Dimensions {
    /// The dimensionless vector.
    pub fn scalar() -> Self {
        Dimensions(BTreeMap::new())
    }

    /// `{label: 1}`
    pub fn from_unit(label: &str) -> Self {
        Dimensions::scalar().set(label, 1.0)
    }

    /// Exponent of `label`, zero when absent.
    pub fn get(&self, label: &str) -> f64 {
        self.0.get(label).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn set(&self, label: &str, exponent: f64) -> Self {
        let mut map = self.0.clone();
        if exponent == 0.0 {
            map.remove(label);
        } else {
            map.insert(label.to_string(), exponent);
        }
        Dimensions(map)
    }

    pub fn is_scalar(&self) -> bool {
        self.0.is_empty()
    }

    /// Scale every exponent by `n`.
    #[must_use]
    pub fn power(&self, n: f64) -> Self {
        self.0
            .iter()
            .map(|(label, exponent)| (label.clone(), exponent * n))
            .collect()
    }

    #[must_use]
    pub fn times(&self, other: &Dimensions) -> Self {
        self.combine(other, 1.0)
    }

    #[must_use]
    pub fn divide(&self, other: &Dimensions) -> Self {
        self.combine(other, -1.0)
    }

    fn combine(&self, other: &Dimensions, sign: f64) -> Self {
        let mut map = self.0.clone();
        for (label, exponent) in &other.0 {
            let sum = self.get(label) + sign * exponent;
            if sum == 0.0 {
                map.remove(label);
            } else {
                map.insert(label.clone(), sum);
            }
        }
        Dimensions(map)
    }

    /// Labels and exponents in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(label, exponent)| (label.as_str(), *exponent))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Dimensions {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut map = BTreeMap::new();
        for (label, exponent) in iter {
            let label = label.into();
            let exponent = map.get(&label).copied().unwrap_or(0.0) + exponent;
            if exponent == 0.0 {
                map.remove(&label);
            } else {
                map.insert(label, exponent);
            }
        }
        Dimensions(map)
    }
}
