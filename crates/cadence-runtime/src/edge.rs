//! Fixed-size held/pressed/released tables with dirty-list frame resets

/// Per-frame edge state for `N` dense button indices.
///
/// `pressed` and `released` are only ever set for indices pushed onto the
/// dirty list in the same frame, so [`EdgeTable::begin_frame`] clears them
/// in O(changes) instead of O(N).
#[derive(Debug, Clone)]
pub struct EdgeTable<const N: usize> {
    held: [bool; N],
    pressed: [bool; N],
    released: [bool; N],
    dirty: Vec<usize>,
    /// Presses since the last frame boundary
    any_down_count: u32,
    /// Indices currently held
    held_count: u32,
}

impl<const N: usize> Default for EdgeTable<N> {
    fn default() -> Self {
        Self {
            held: [false; N],
            pressed: [false; N],
            released: [false; N],
            dirty: Vec::with_capacity(N.min(32)),
            any_down_count: 0,
            held_count: 0,
        }
    }
}

impl<const N: usize> EdgeTable<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the transient flags set last frame
    pub fn begin_frame(&mut self) {
        for &index in &self.dirty {
            self.pressed[index] = false;
            self.released[index] = false;
        }
        self.dirty.clear();
        self.any_down_count = 0;
    }

    /// Record a press edge. Returns false if out of range or already held.
    pub fn press(&mut self, index: usize) -> bool {
        if index >= N || self.held[index] {
            return false;
        }
        self.held[index] = true;
        self.pressed[index] = true;
        self.any_down_count += 1;
        self.held_count += 1;
        self.dirty.push(index);
        true
    }

    /// Record a release edge. Returns false if out of range or not held.
    pub fn release(&mut self, index: usize) -> bool {
        if index >= N || !self.held[index] {
            return false;
        }
        self.held[index] = false;
        self.released[index] = true;
        self.held_count -= 1;
        self.dirty.push(index);
        true
    }

    #[inline]
    pub fn held(&self, index: usize) -> bool {
        self.held.get(index).copied().unwrap_or(false)
    }

    #[inline]
    pub fn pressed(&self, index: usize) -> bool {
        self.pressed.get(index).copied().unwrap_or(false)
    }

    #[inline]
    pub fn released(&self, index: usize) -> bool {
        self.released.get(index).copied().unwrap_or(false)
    }

    /// Whether anything was pressed since the last frame boundary.
    ///
    /// Not decremented on release: an index pressed and released in the same
    /// frame still counts until the next [`EdgeTable::begin_frame`].
    pub fn any_down(&self) -> bool {
        self.any_down_count > 0
    }

    pub fn any_down_count(&self) -> u32 {
        self.any_down_count
    }

    /// Whether any index is currently held
    pub fn any_held(&self) -> bool {
        self.held_count > 0
    }

    pub fn held_count(&self) -> u32 {
        self.held_count
    }

    /// Indices that changed this frame, in event order (may repeat)
    pub fn dirty(&self) -> &[usize] {
        &self.dirty
    }

    pub fn held_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.held
            .iter()
            .enumerate()
            .filter_map(|(index, &held)| held.then_some(index))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
