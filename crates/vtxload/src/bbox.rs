//! Bounding box side channel.

/// Running extrema of the decoded positions of the draw calls it is active for.
///
/// Only the raw x and y components of the decoded positions are tracked. Vertices skipped through
/// the index sentinel do not contribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Whether decode calls should update this bounding box.
    pub active: bool,
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            active: false,
            left: f32::INFINITY,
            right: f32::NEG_INFINITY,
            top: f32::INFINITY,
            bottom: f32::NEG_INFINITY,
        }
    }
}

impl BoundingBox {
    /// An active bounding box with empty extrema.
    pub fn active() -> Self {
        Self {
            active: true,
            ..Default::default()
        }
    }

    /// Empties the extrema, keeping the activation state.
    pub fn reset(&mut self) {
        *self = Self {
            active: self.active,
            ..Default::default()
        };
    }

    /// Whether no position has been folded since the last reset.
    pub fn is_empty(&self) -> bool {
        self.left > self.right
    }

    #[inline(always)]
    pub(crate) fn fold(&mut self, x: f32, y: f32) {
        self.left = self.left.min(x);
        self.right = self.right.max(x);
        self.top = self.top.min(y);
        self.bottom = self.bottom.max(y);
    }

    /// The extrema as `[left, right, top, bottom]`.
    pub fn extrema(&self) -> [f32; 4] {
        [self.left, self.right, self.top, self.bottom]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn folds_extrema() {
        let mut bbox = BoundingBox::active();
        assert!(bbox.is_empty());

        bbox.fold(1.0, -2.0);
        bbox.fold(-3.0, 4.0);
        bbox.fold(0.5, 0.5);
        assert_eq!(bbox.extrema(), [-3.0, 1.0, -2.0, 4.0]);

        bbox.reset();
        assert!(bbox.active);
        assert!(bbox.is_empty());
    }
}
