/// Integer grid index, axis 0 first.
pub type Index<const D: usize> = [i64; D];

/// Real-valued grid coordinate in index space.
pub type ContinuousIndex<const D: usize> = [f64; D];

/// Axis-aligned block of the index grid: `start` plus `size` pixels per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region<const D: usize> {
    pub start: Index<D>,
    pub size: [usize; D],
}

impl<const D: usize> Region<D> {
    pub fn new(start: Index<D>, size: [usize; D]) -> Self {
        Self { start, size }
    }

    pub fn from_size(size: [usize; D]) -> Self {
        Self {
            start: [0; D],
            size,
        }
    }

    /// Last index of the region, inclusive. Meaningless for empty regions.
    #[inline]
    pub fn end(&self) -> Index<D> {
        std::array::from_fn(|d| self.start[d] + self.size[d] as i64 - 1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.iter().any(|&s| s == 0)
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.size.iter().product()
    }

    #[inline]
    pub fn contains(&self, index: &Index<D>) -> bool {
        (0..D).all(|d| index[d] >= self.start[d] && index[d] < self.start[d] + self.size[d] as i64)
    }

    /// Nearest in-region index. The region must not be empty.
    #[inline]
    pub fn clamp(&self, index: &Index<D>) -> Index<D> {
        debug_assert!(!self.is_empty());
        let end = self.end();
        std::array::from_fn(|d| index[d].clamp(self.start[d], end[d]))
    }

    /// Grows the region by `radius` pixels on both sides of every axis.
    pub fn padded(&self, radius: u32) -> Self {
        let r = radius as i64;
        Self {
            start: std::array::from_fn(|d| self.start[d] - r),
            size: std::array::from_fn(|d| self.size[d] + 2 * radius as usize),
        }
    }

    /// Intersection with `other`. Returns `None` when they do not overlap.
    pub fn cropped_by(&self, other: &Region<D>) -> Option<Self> {
        let mut start = [0i64; D];
        let mut size = [0usize; D];
        for d in 0..D {
            let lo = self.start[d].max(other.start[d]);
            let hi = (self.start[d] + self.size[d] as i64).min(other.start[d] + other.size[d] as i64);
            if hi <= lo {
                return None;
            }
            start[d] = lo;
            size[d] = (hi - lo) as usize;
        }
        Some(Self { start, size })
    }

    /// Iterates every index of the region, axis 0 fastest.
    pub fn indices(&self) -> RegionIndices<D> {
        RegionIndices {
            region: *self,
            next: if self.is_empty() { None } else { Some(self.start) },
        }
    }
}

/// Iterator over the indices of a [`Region`].
#[derive(Debug, Clone)]
pub struct RegionIndices<const D: usize> {
    region: Region<D>,
    next: Option<Index<D>>,
}

impl<const D: usize> Iterator for RegionIndices<D> {
    type Item = Index<D>;

    fn next(&mut self) -> Option<Index<D>> {
        let current = self.next?;
        let mut following = current;
        let mut advanced = false;
        for d in 0..D {
            following[d] += 1;
            if following[d] < self.region.start[d] + self.region.size[d] as i64 {
                advanced = true;
                break;
            }
            following[d] = self.region.start[d];
        }
        self.next = advanced.then_some(following);
        Some(current)
    }
}
