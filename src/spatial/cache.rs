use crate::model::region::Region;
use crate::spatial::geometry::Rect;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::collections::HashMap;

/// Memoization cache for located hole rectangles
///
/// A render pass asks for every hole once per tile; locating a region only
/// depends on the region itself, so each is computed once per layout. A
/// region maps to one rectangle per offset course it spans.
#[derive(Default, Debug)]
pub struct HoleCache {
    /// Region to located rectangle mapping
    rects: RefCell<HashMap<Region, Rc<[Rect]>>>,

    hits: Cell<usize>,
    misses: Cell<usize>,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl HoleCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the cached rectangles or compute and store them
    ///
    /// Regions are normalized first, so both corner orders share an entry.
    pub fn get_or_compute<F>(&self, region: &Region, compute_fn: F) -> Rc<[Rect]>
    where
        F: FnOnce(&Region) -> Vec<Rect>,
    {
        let key = region.normalized();

        if let Some(rects) = self.rects.borrow().get(&key) {
            self.hits.set(self.hits.get() + 1);
            return Rc::clone(rects);
        }

        self.misses.set(self.misses.get() + 1);
        let rects: Rc<[Rect]> = compute_fn(&key).into();
        self.rects.borrow_mut().insert(key, Rc::clone(&rects));
        rects
    }

    /// Current hit and miss counts
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
        }
    }

    /// Number of distinct regions stored
    pub fn len(&self) -> usize {
        self.rects.borrow().len()
    }

    /// Check whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
