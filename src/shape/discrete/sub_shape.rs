use super::DiscreteVoxelShape;
use crate::math::Axis;
use crate::shape::ShapeError;
use std::sync::Arc;

/// A rectangular window into another discrete shape.
///
/// Cell `(x, y, z)` of the window is cell `start + (x, y, z)` of the parent. Nothing is
/// copied: the window shares the parent grid and clamps its cached bounds at read time.
#[derive(Clone, Debug)]
pub struct SubShape {
    parent: Arc<DiscreteVoxelShape>,
    start: [i32; 3],
    end: [i32; 3],
}

impl SubShape {
    /// The window `[start, end)` of `parent`.
    ///
    /// The window may extend past the parent grid: cells outside of it read as empty.
    pub fn new(
        parent: Arc<DiscreteVoxelShape>,
        start: [i32; 3],
        end: [i32; 3],
    ) -> Result<Self, ShapeError> {
        if (0..3).any(|i| end[i] < start[i]) {
            return Err(ShapeError::NegativeSize {
                x: end[0] - start[0],
                y: end[1] - start[1],
                z: end[2] - start[2],
            });
        }

        Ok(Self { parent, start, end })
    }

    /// The one-cell-thick layer of `parent` at index `index` along `axis`.
    pub(crate) fn layer(parent: Arc<DiscreteVoxelShape>, axis: Axis, index: i32) -> Self {
        let start = axis.choose([index, 0, 0], [0, index, 0], [0, 0, index]);
        let mut end = [parent.x_size(), parent.y_size(), parent.z_size()];
        end[axis.index()] = index + 1;

        if index < 0 || index >= parent.size(axis) {
            log::trace!(
                "Slicing a discrete shape along {axis:?} at {index}, outside of its {} cells.",
                parent.size(axis)
            );
        }

        Self { parent, start, end }
    }

    /// The number of cells of this window along `axis`.
    #[inline]
    pub fn size(&self, axis: Axis) -> i32 {
        self.end[axis.index()] - self.start[axis.index()]
    }

    /// Is the cell `(x, y, z)` of this window full?
    #[inline]
    pub fn is_full(&self, x: i32, y: i32, z: i32) -> bool {
        self.parent
            .is_full_wide(self.start[0] + x, self.start[1] + y, self.start[2] + z)
    }

    /// The parent's first full index along `axis`, clamped to this window.
    #[inline]
    pub fn first_full(&self, axis: Axis) -> i32 {
        self.clamp_to_window(axis, self.parent.first_full(axis))
    }

    /// The parent's last full index along `axis`, clamped to this window.
    #[inline]
    pub fn last_full(&self, axis: Axis) -> i32 {
        self.clamp_to_window(axis, self.parent.last_full(axis))
    }

    fn clamp_to_window(&self, axis: Axis, value: i32) -> i32 {
        let start = self.start[axis.index()];
        let end = self.end[axis.index()];
        value.clamp(start, end) - start
    }
}
