// src/vector.rs
//! Dense N-dimensional vector with checked arithmetic.

use crate::error::{LinalgError, Result};
use crate::types::{within, Scalar, EPSILON};
use std::fmt;
use std::ops::{Index, IndexMut, Mul, Neg};

/// A fixed-length vector of real components.
///
/// The dimension is set at construction and never changes; components are
/// 0-based and writable through `IndexMut`. Every arithmetic method returns
/// a new vector and leaves its operands untouched.
#[derive(Clone, Debug, Default)]
pub struct Vector {
    components: Vec<Scalar>,
}

impl Vector {
    /// Take ownership of `components`.
    #[inline(always)]
    pub fn new(components: Vec<Scalar>) -> Self {
        Self { components }
    }

    /// The zero vector of the given dimension.
    pub fn zeros(dimensions: usize) -> Self {
        Self { components: vec![0.0; dimensions] }
    }

    /// Number of components.
    #[inline(always)]
    pub fn dimensions(&self) -> usize {
        self.components.len()
    }

    /// Component `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Scalar> {
        self.components.get(index).copied()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[Scalar] {
        &self.components
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [Scalar] {
        &mut self.components
    }

    pub fn into_inner(self) -> Vec<Scalar> {
        self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.components.iter()
    }

    /// Multiply every component by `s`.
    pub fn scale(&self, s: Scalar) -> Self {
        Self::new(self.components.iter().map(|x| s * x).collect())
    }

    /// Componentwise sum.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.check_same_dimensions("vector add", other)?;
        Ok(Self::new(
            self.components
                .iter()
                .zip(&other.components)
                .map(|(a, b)| a + b)
                .collect(),
        ))
    }

    /// `self + (-1 * other)`.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.try_add(&other.scale(-1.0))
    }

    /// Dot product of two vectors of equal dimension.
    pub fn dot(&self, other: &Self) -> Result<Scalar> {
        self.check_same_dimensions("dot product", other)?;
        Ok(self.dot_unchecked(other))
    }

    /// Squared Euclidean length; skips the square root of [`magnitude`](Self::magnitude).
    #[inline]
    pub fn sqr_magnitude(&self) -> Scalar {
        self.dot_unchecked(self)
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(&self) -> Scalar {
        self.sqr_magnitude().sqrt()
    }

    /// Unit vector in the same direction.
    pub fn normalized(&self) -> Result<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(LinalgError::ZeroMagnitude);
        }
        Ok(Self::new(self.components.iter().map(|x| x / mag).collect()))
    }

    /// Angle between two vectors, in radians.
    pub fn angle(&self, other: &Self) -> Result<Scalar> {
        let dot = self.dot(other)?;
        let denom = self.magnitude() * other.magnitude();
        if denom == 0.0 {
            return Err(LinalgError::ZeroMagnitude);
        }
        // rounding can push parallel vectors just past ±1
        Ok((dot / denom).clamp(-1.0, 1.0).acos())
    }

    /// Right-handed cross product; both operands must be 3-dimensional.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        if self.dimensions() != 3 || other.dimensions() != 3 {
            return Err(LinalgError::mismatch(
                "cross product",
                self.shape(),
                other.shape(),
            ));
        }
        let (a, b) = (&self.components, &other.components);
        Ok(Self::new(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    /// Same dimension and every component within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: Scalar) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .components
                .iter()
                .zip(&other.components)
                .all(|(a, b)| within(*a, *b, tolerance))
    }

    /// Caller guarantees equal dimensions.
    #[inline]
    pub(crate) fn dot_unchecked(&self, other: &Self) -> Scalar {
        let mut sum: Scalar = 0.0;
        for (a, b) in self.components.iter().zip(&other.components) {
            sum += a * b;
        }
        sum
    }

    fn check_same_dimensions(&self, operation: &'static str, other: &Self) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(LinalgError::mismatch(operation, self.shape(), other.shape()));
        }
        Ok(())
    }

    fn shape(&self) -> String {
        format!("{}-vector", self.dimensions())
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, EPSILON)
    }
}

impl From<Vec<Scalar>> for Vector {
    fn from(components: Vec<Scalar>) -> Self {
        Self::new(components)
    }
}

impl From<&[Scalar]> for Vector {
    fn from(components: &[Scalar]) -> Self {
        Self::new(components.to_vec())
    }
}

impl<const N: usize> From<[Scalar; N]> for Vector {
    fn from(components: [Scalar; N]) -> Self {
        Self::new(components.to_vec())
    }
}

impl From<Vector> for Vec<Scalar> {
    fn from(v: Vector) -> Self {
        v.components
    }
}

impl Index<usize> for Vector {
    type Output = Scalar;
    #[inline(always)]
    fn index(&self, index: usize) -> &Scalar {
        &self.components[index]
    }
}

impl IndexMut<usize> for Vector {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Scalar {
        &mut self.components[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;
    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

// Scalar multiplication, both orders.
impl Mul<Scalar> for &Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Scalar) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<Scalar> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Scalar) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<&Vector> for Scalar {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: &Vector) -> Vector {
        rhs.scale(self)
    }
}

impl Mul<Vector> for Scalar {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        rhs.scale(self)
    }
}

impl Neg for &Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(mut self) -> Vector {
        for x in &mut self.components {
            *x = -*x;
        }
        self
    }
}

/// Renders as `[ v1 v2 ... ]`.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[ ")?;
        for x in &self.components {
            write!(f, "{} ", x)?;
        }
        write!(f, "]")
    }
}
