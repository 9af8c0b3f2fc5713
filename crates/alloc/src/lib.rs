//! # Allocator Policy
//!
//! A single `{allocate, free, reallocate}` triple used by every other
//! component in the workspace. A process-wide default is installed at
//! startup; callers may replace it at process scope via [`install`].
//! Every parser and serializer snapshots the active triple at
//! construction time ([`active`]) so in-flight operations are insulated
//! from a later [`install`] call.

mod buffer;
mod hooks;

pub use buffer::{BufferError, OwnedBytes, RawBuffer};
pub use hooks::{Hooks, SystemHooks};

use std::sync::{Arc, OnceLock, RwLock};

/// Hard ceiling on any single allocation the core will request, matching
/// the reference implementation's 31-bit growth bound.
pub const SIZE_CEILING: usize = i32::MAX as usize;

fn active_cell() -> &'static RwLock<Arc<dyn Hooks>> {
    static ACTIVE: OnceLock<RwLock<Arc<dyn Hooks>>> = OnceLock::new();
    ACTIVE.get_or_init(|| RwLock::new(Arc::new(SystemHooks) as Arc<dyn Hooks>))
}

/// Replace the process-wide allocator hooks. Affects only parsers and
/// serializers constructed afterward.
pub fn install(hooks: Arc<dyn Hooks>) {
    *active_cell().write().expect("allocator hook lock poisoned") = hooks;
}

/// Restore the platform default hooks.
pub fn install_default() {
    install(Arc::new(SystemHooks));
}

/// Snapshot of the currently active hooks, to be captured by a parser or
/// serializer at construction.
pub fn active() -> Arc<dyn Hooks> {
    active_cell().read().expect("allocator hook lock poisoned").clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr::NonNull;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHooks {
        allocations: AtomicUsize,
    }

    impl Hooks for CountingHooks {
        fn allocate_aligned(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
            self.allocations.fetch_add(1, Ordering::SeqCst);
            SystemHooks.allocate_aligned(size, align)
        }

        fn free_aligned(&self, ptr: NonNull<u8>, size: usize, align: usize) {
            SystemHooks.free_aligned(ptr, size, align);
        }
    }

    #[test]
    fn install_is_observed_by_new_snapshots_only() {
        let before = active();
        let counting = Arc::new(CountingHooks { allocations: AtomicUsize::new(0) });
        install(counting.clone());
        let after = active();
        assert!(!Arc::ptr_eq(&before, &after));
        install_default();
    }
}
