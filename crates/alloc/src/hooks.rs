use std::alloc::{Layout, alloc, dealloc, realloc};
use std::ptr::{self, NonNull};

/// The minimum alignment the core ever requests: buffers are plain byte
/// arrays, and tree nodes are aligned by `Layout::new::<T>()` at the call
/// site, so this hook only needs to honor whatever alignment it is given.
fn layout_for(size: usize, align: usize) -> Option<Layout> {
    Layout::from_size_align(size, align).ok()
}

/// The allocate/free/reallocate triple. Implementors only need to provide
/// `allocate` and `free`; `reallocate` has a default emulation (allocate +
/// copy + free) matching the reference behavior for hooks that don't
/// supply their own reallocate. [`SystemHooks`] overrides it with the
/// platform's real realloc.
pub trait Hooks: Send + Sync {
    /// Allocate `size` bytes aligned to `align`, or `None` on failure.
    fn allocate_aligned(&self, size: usize, align: usize) -> Option<NonNull<u8>>;

    /// Allocate `size` bytes at the default byte alignment.
    fn allocate(&self, size: usize) -> Option<NonNull<u8>> {
        self.allocate_aligned(size, 1)
    }

    /// Free a block previously returned by `allocate`/`allocate_aligned`.
    fn free_aligned(&self, ptr: NonNull<u8>, size: usize, align: usize);

    fn free(&self, ptr: NonNull<u8>, size: usize) {
        self.free_aligned(ptr, size, 1);
    }

    /// Grow or shrink a block in place if possible, otherwise emulate via
    /// allocate + copy + free.
    fn reallocate_aligned(&self, ptr: NonNull<u8>, old_size: usize, new_size: usize, align: usize) -> Option<NonNull<u8>> {
        let new_ptr = self.allocate_aligned(new_size, align)?;
        unsafe {
            ptr::copy_nonoverlapping(ptr.as_ptr(), new_ptr.as_ptr(), old_size.min(new_size));
        }
        self.free_aligned(ptr, old_size, align);
        Some(new_ptr)
    }

    fn reallocate(&self, ptr: NonNull<u8>, old_size: usize, new_size: usize) -> Option<NonNull<u8>> {
        self.reallocate_aligned(ptr, old_size, new_size, 1)
    }
}

/// The platform default: `std::alloc`'s global allocator.
pub struct SystemHooks;

impl Hooks for SystemHooks {
    fn allocate_aligned(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
        if size == 0 {
            return NonNull::new(align as *mut u8);
        }
        let layout = layout_for(size, align)?;
        NonNull::new(unsafe { alloc(layout) })
    }

    fn free_aligned(&self, ptr: NonNull<u8>, size: usize, align: usize) {
        if size == 0 {
            return;
        }
        if let Some(layout) = layout_for(size, align) {
            unsafe { dealloc(ptr.as_ptr(), layout) };
        }
    }

    fn reallocate_aligned(&self, ptr: NonNull<u8>, old_size: usize, new_size: usize, align: usize) -> Option<NonNull<u8>> {
        if old_size == 0 {
            return self.allocate_aligned(new_size, align);
        }
        if new_size == 0 {
            self.free_aligned(ptr, old_size, align);
            return NonNull::new(align as *mut u8);
        }
        let old_layout = layout_for(old_size, align)?;
        NonNull::new(unsafe { realloc(ptr.as_ptr(), old_layout, new_size) })
    }
}
