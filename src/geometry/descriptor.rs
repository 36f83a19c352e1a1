use crate::error::DescriptorError;
use crate::math::polygon_2d::regular_polygon_angle;

/// Partial description of a closed polygon.
///
/// `sides[i]` is the length of the edge from vertex `i` to vertex `i + 1`
/// (the last one closes back to vertex 0). `angles[i]` is the interior
/// angle, in degrees, at vertex `i + 1`. The last three angles are left
/// out: they follow from closing the polygon.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolygonDescriptor {
    pub sides: Vec<f64>,
    pub angles: Vec<f64>,
}

impl PolygonDescriptor {
    /// Creates a descriptor from side lengths and known interior angles.
    ///
    /// Values are stored as given. Use [`validate`](Self::validate) to
    /// check them.
    #[must_use]
    pub fn new(sides: Vec<f64>, angles: Vec<f64>) -> Self {
        Self { sides, angles }
    }

    /// Creates a descriptor from form fields where a blank entry means zero.
    #[must_use]
    pub fn from_optional(sides: &[Option<f64>], angles: &[Option<f64>]) -> Self {
        Self {
            sides: sides.iter().map(|s| s.unwrap_or(0.0)).collect(),
            angles: angles.iter().map(|a| a.unwrap_or(0.0)).collect(),
        }
    }

    /// Creates the descriptor of a regular polygon with `n` sides of length `side`.
    #[must_use]
    pub fn regular(n: usize, side: f64) -> Self {
        let angle = regular_polygon_angle(n);
        Self {
            sides: vec![side; n],
            angles: vec![angle; n.saturating_sub(3)],
        }
    }

    /// Number of sides (and of vertices once reconstructed).
    #[must_use]
    pub fn side_count(&self) -> usize {
        self.sides.len()
    }

    /// Number of angles a descriptor with this many sides must carry.
    #[must_use]
    pub fn expected_angle_count(&self) -> usize {
        self.sides.len().saturating_sub(3)
    }

    /// Checks the descriptor for structural problems.
    ///
    /// # Errors
    ///
    /// - `DescriptorError::AngleCount` if there are not exactly `n - 3`
    ///   angles (none at all below three sides)
    /// - `DescriptorError::NonFiniteAngle` for a NaN or infinite angle
    /// - `DescriptorError::NegativeSide` / `NonFiniteSide` for a side that
    ///   is not a finite non-negative length
    pub fn validate(&self) -> Result<(), DescriptorError> {
        let expected = self.expected_angle_count();
        if self.angles.len() != expected {
            return Err(DescriptorError::AngleCount {
                sides: self.sides.len(),
                expected,
                found: self.angles.len(),
            });
        }

        if let Some((index, &value)) = self
            .angles
            .iter()
            .enumerate()
            .find(|(_, a)| !a.is_finite())
        {
            return Err(DescriptorError::NonFiniteAngle { index, value });
        }

        for (index, &value) in self.sides.iter().enumerate() {
            if !value.is_finite() {
                return Err(DescriptorError::NonFiniteSide { index, value });
            }
            if value < 0.0 {
                return Err(DescriptorError::NegativeSide { index, value });
            }
        }

        Ok(())
    }

    /// Returns `true` if [`validate`](Self::validate) succeeds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
