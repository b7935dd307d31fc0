use super::*;

impl GridSpec {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { (self.width * self.height) as usize }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    #[inline]
    pub fn contains(&self, cell: CellCoord) -> bool {
        self.in_bounds(cell.x, cell.y)
    }

    // === Index conversion ===

    /// Slot index without bounds check (x-major)
    #[inline(always)]
    pub fn index_unchecked(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "index_unchecked: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        (x * self.height + y) as usize
    }

    #[inline]
    pub fn slot(&self, cell: CellCoord) -> Option<usize> {
        if self.contains(cell) {
            Some(self.index_unchecked(cell.x as u32, cell.y as u32))
        } else {
            None
        }
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> CellCoord {
        let x = (idx as u32) / self.height;
        let y = (idx as u32) % self.height;
        CellCoord::new(x as i32, y as i32)
    }

    /// Every in-bounds cell, x outer, y inner
    pub fn cells(&self) -> CellCoords {
        CellCoords { width: self.width, height: self.height, next: 0 }
    }
}

pub struct CellCoords {
    width: u32,
    height: u32,
    next: u32,
}

impl Iterator for CellCoords {
    type Item = CellCoord;

    fn next(&mut self) -> Option<CellCoord> {
        if self.next >= self.width * self.height {
            return None;
        }
        let idx = self.next;
        self.next += 1;
        Some(CellCoord::new((idx / self.height) as i32, (idx % self.height) as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.width * self.height - self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for CellCoords {}
