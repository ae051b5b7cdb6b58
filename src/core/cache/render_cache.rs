//! Memoization of rendered images keyed by [`RenderParams`].
//!
//! Each key owns a once-cell. The first caller for a key installs the cell
//! and computes into it; concurrent callers for the same key block on the
//! cell until the single computation finishes. Callers for other keys are
//! never held up by a computation. Entries are never evicted.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use log::debug;

use crate::core::actions::render_image::ports::render_kernel::RenderKernel;
use crate::core::data::render_params::RenderParams;
use crate::core::data::rendered_image::RenderedImage;

type Slot = Arc<OnceLock<Arc<RenderedImage>>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

pub struct RenderCache<K: RenderKernel> {
    kernel: K,
    slots: RwLock<HashMap<RenderParams, Slot>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K: RenderKernel> RenderCache<K> {
    #[must_use]
    pub fn new(kernel: K) -> Self {
        Self {
            kernel,
            slots: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Returns the image for `params`, rendering it at most once per key.
    pub fn get_or_compute(&self, params: &RenderParams) -> Arc<RenderedImage> {
        let slot = self.slot_for(params);

        if let Some(image) = slot.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("cache hit: {:?}", params);
            return Arc::clone(image);
        }

        let mut computed = false;
        let image = slot.get_or_init(|| {
            computed = true;
            debug!("cache miss, rendering: {:?}", params);
            Arc::new(self.kernel.render(params))
        });

        // A caller that waited on someone else's computation still got a
        // stored result.
        if computed {
            self.misses.fetch_add(1, Ordering::Relaxed);
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }

        Arc::clone(image)
    }

    /// Finished image for `params`, if any. Never renders.
    #[must_use]
    pub fn get(&self, params: &RenderParams) -> Option<Arc<RenderedImage>> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);

        slots.get(params).and_then(|slot| slot.get().cloned())
    }

    #[must_use]
    pub fn contains(&self, params: &RenderParams) -> bool {
        self.get(params).is_some()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let entries = self
            .slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|slot| slot.get().is_some())
            .count();

        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries,
        }
    }

    fn slot_for(&self, params: &RenderParams) -> Slot {
        {
            let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = slots.get(params) {
                return Arc::clone(slot);
            }
        }

        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(*params).or_default())
    }
}
