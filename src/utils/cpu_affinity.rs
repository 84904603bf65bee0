//! Thread pinning for the duration of a measurement.
//!
//! A demo that migrates between cores mid-loop loses its warm cache lines
//! and its timing stops saying anything about the loop. The runner pins the
//! thread through [`CpuPinGuard`], which restores the original affinity when
//! dropped.
//!
//! Only Linux supports real pinning; elsewhere the guard is a no-op and
//! reports itself as unpinned.

#[cfg(target_os = "linux")]
mod platform {
    /// Core the calling thread is running on right now.
    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    /// Current affinity mask of the calling thread.
    pub fn get_affinity() -> Option<libc::cpu_set_t> {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            (libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0)
                .then_some(set)
        }
    }

    pub fn set_affinity(set: &libc::cpu_set_t) -> bool {
        unsafe { libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), set) == 0 }
    }

    /// Restrict the calling thread to a single core.
    pub fn pin(core_id: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            set_affinity(&set)
        }
    }

    pub type SavedAffinity = libc::cpu_set_t;
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn get_affinity() -> Option<()> {
        None
    }
    pub fn set_affinity(_set: &()) -> bool {
        false
    }
    pub fn pin(_core_id: usize) -> bool {
        false
    }

    pub type SavedAffinity = ();
}

/// Core the calling thread is running on, if the platform can tell.
pub fn current_cpu() -> Option<usize> {
    platform::current_cpu()
}

/// RAII guard: pins the thread to its current core on creation and
/// restores the previous affinity on drop, even if the measurement panics.
///
/// # Example
/// ```
/// use memory_access_demos::utils::cpu_affinity::CpuPinGuard;
///
/// {
///     let _pin = CpuPinGuard::new();
///     // ... time a loop ...
/// } // previous affinity restored here
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    saved: Option<platform::SavedAffinity>,
}

impl CpuPinGuard {
    /// Pin to the core the thread is currently running on.
    pub fn new() -> Self {
        match current_cpu() {
            Some(core) => Self::with_core(core),
            None => Self {
                pinned_core: None,
                saved: None,
            },
        }
    }

    /// Pin to a specific core.
    pub fn with_core(core_id: usize) -> Self {
        let saved = platform::get_affinity();
        let pinned = saved.is_some() && platform::pin(core_id);
        if !pinned {
            log::warn!("could not pin thread to core {}", core_id);
        }
        Self {
            pinned_core: pinned.then_some(core_id),
            saved: if pinned { saved } else { None },
        }
    }

    /// Core this thread is pinned to, if any.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            if !platform::set_affinity(&saved) {
                log::warn!("could not restore thread affinity");
            }
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
