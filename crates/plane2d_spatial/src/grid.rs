//! Uniform-grid spatial hash
//!
//! Broad-phase proximity index: positions hash to fixed-size grid cells,
//! each cell holds a bucket of tracked items, and a reverse index maps each
//! item back to its cell so removal and relocation never scan the whole
//! grid. Query results are an over-approximation; callers needing exact
//! distances apply their own fine filter.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Integer cell coordinates
///
/// A full (i32, i32) pair is used as the key; there is no packed encoding
/// and therefore no aliasing at any grid extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct CellKey {
    x: i32,
    y: i32,
}

/// Error type for spatial hash construction
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Cell size must be strictly positive and finite
    InvalidCellSize(f32),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidCellSize(size) => {
                write!(f, "Grid cell size must be positive and finite, got {}", size)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A uniform grid mapping 2D positions to buckets of tracked items
///
/// Items are opaque caller-supplied ids (`Copy + Eq + Hash`); tracking an
/// item does not own or extend the lifetime of whatever the id refers to.
/// An item belongs to at most one cell at a time.
#[derive(Clone, Debug)]
pub struct SpatialHash<T> {
    cell_size: f32,
    cells: HashMap<CellKey, Vec<T>>,
    index: HashMap<T, CellKey>,
}

impl<T: Copy + Eq + Hash + fmt::Debug> SpatialHash<T> {
    /// Create a new spatial hash with a fixed cell size
    ///
    /// Returns [`GridError::InvalidCellSize`] unless the size is strictly
    /// positive and finite.
    pub fn new(cell_size: f32) -> Result<Self, GridError> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GridError::InvalidCellSize(cell_size));
        }
        Ok(Self {
            cell_size,
            cells: HashMap::new(),
            index: HashMap::new(),
        })
    }

    /// The cell size fixed at construction
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Integer cell coordinates for a position
    pub fn cell_coords(&self, x: f32, y: f32) -> (i32, i32) {
        let key = self.key_for(x, y);
        (key.x, key.y)
    }

    /// Track an item at a position
    ///
    /// An item may occupy only one cell; re-inserting a tracked item logs a
    /// warning and relocates it (equivalent to [`update`](Self::update)).
    pub fn insert(&mut self, item: T, x: f32, y: f32) {
        if self.index.contains_key(&item) {
            log::warn!("SpatialHash::insert on already-tracked item {:?}; relocating", item);
            self.remove(item);
        }
        let key = self.key_for(x, y);
        self.cells.entry(key).or_default().push(item);
        self.index.insert(item, key);
    }

    /// Stop tracking an item
    ///
    /// Returns false when the item was not tracked. Buckets are expected to
    /// stay small, so the in-bucket removal is a linear scan; emptied
    /// buckets are dropped.
    pub fn remove(&mut self, item: T) -> bool {
        let Some(key) = self.index.remove(&item) else {
            return false;
        };
        if let Some(bucket) = self.cells.get_mut(&key) {
            bucket.retain(|tracked| *tracked != item);
            if bucket.is_empty() {
                self.cells.remove(&key);
            }
        }
        true
    }

    /// Move a tracked item to a new position
    ///
    /// No-op when the new position falls in the item's current cell.
    /// Untracked items log a warning and are inserted.
    pub fn update(&mut self, item: T, x: f32, y: f32) {
        let new_key = self.key_for(x, y);
        match self.index.get(&item) {
            Some(old_key) if *old_key == new_key => {}
            Some(_) => {
                self.remove(item);
                self.cells.entry(new_key).or_default().push(item);
                self.index.insert(item, new_key);
            }
            None => {
                log::warn!("SpatialHash::update on untracked item {:?}; inserting", item);
                self.cells.entry(new_key).or_default().push(item);
                self.index.insert(item, new_key);
            }
        }
    }

    /// Collect every item whose cell overlaps the query's bounding square
    ///
    /// Broad-phase over-approximation: the result is a superset of all items
    /// within `radius` of (x, y) by true Euclidean distance; extra items
    /// from cell granularity are expected. A negative or non-finite radius
    /// logs a warning and returns an empty result.
    pub fn query(&self, x: f32, y: f32, radius: f32) -> Vec<T> {
        let mut results = Vec::new();
        self.query_into(x, y, radius, &mut results);
        results
    }

    /// [`query`](Self::query) into a caller-supplied buffer
    ///
    /// The buffer is cleared first; reuse it (or pool it) to avoid a fresh
    /// allocation per query.
    pub fn query_into(&self, x: f32, y: f32, radius: f32, out: &mut Vec<T>) {
        out.clear();
        if !(radius.is_finite() && radius >= 0.0) {
            log::warn!("SpatialHash::query rejected radius {}", radius);
            return;
        }
        let min = self.key_for(x - radius, y - radius);
        let max = self.key_for(x + radius, y + radius);
        for cy in min.y..=max.y {
            for cx in min.x..=max.x {
                if let Some(bucket) = self.cells.get(&CellKey { x: cx, y: cy }) {
                    out.extend_from_slice(bucket);
                }
            }
        }
    }

    /// Whether an item is currently tracked
    pub fn contains(&self, item: T) -> bool {
        self.index.contains_key(&item)
    }

    /// Number of tracked items
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when nothing is tracked
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Drop every bucket and reset the reverse index
    ///
    /// Tracked items are not notified.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.index.clear();
    }

    fn key_for(&self, x: f32, y: f32) -> CellKey {
        CellKey {
            x: (x / self.cell_size).floor() as i32,
            y: (y / self.cell_size).floor() as i32,
        }
    }
}
