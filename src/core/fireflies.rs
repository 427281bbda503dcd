use rand::Rng;

/// Fixed-size point cloud of fireflies.
///
/// `positions[i]` and `scales[i]` describe firefly `i`. Both vectors have the
/// same length, set once by [`FireflyField::generate`] and never changed.
#[derive(Clone, Debug, PartialEq)]
pub struct FireflyField {
    positions: Vec<[f32; 3]>,
    scales: Vec<f32>,
}

impl FireflyField {
    /// Scatter `count` fireflies over a box centered on the origin horizontally.
    ///
    /// - x and z are uniform in `[-extent / 2, extent / 2]`
    /// - y is uniform in `[0, height]`
    /// - scale is uniform in `[0, 1)`
    pub fn generate<R: Rng + ?Sized>(count: usize, extent: f32, height: f32, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut scales = Vec::with_capacity(count);
        for _ in 0..count {
            let x = (rng.gen::<f32>() - 0.5) * extent;
            let y = rng.gen::<f32>() * height;
            let z = (rng.gen::<f32>() - 0.5) * extent;
            positions.push([x, y, z]);
            scales.push(rng.gen::<f32>());
        }
        Self { positions, scales }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn scales(&self) -> &[f32] {
        &self.scales
    }

    /// Position and scale of each firefly, in index order.
    pub fn iter(&self) -> impl Iterator<Item = ([f32; 3], f32)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.scales.iter().copied())
    }
}
