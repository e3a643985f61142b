//! Scoped `PRODUCTS_DATA_DIR` overrides for path tests.

use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::platform::DATA_DIR_ENV;

static DATA_DIR_LOCK: Mutex<()> = Mutex::new(());

/// Points `PRODUCTS_DATA_DIR` at a test location until dropped.
///
/// Holds a process-wide lock for its lifetime, so tests using it never see
/// each other's value.
pub struct DataDirOverride {
    previous: Option<OsString>,
    _lock: MutexGuard<'static, ()>,
}

impl DataDirOverride {
    #[allow(unsafe_code)]
    pub fn set(value: impl AsRef<OsStr>) -> Self {
        // A panicking test must not wedge the others
        let lock = DATA_DIR_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let previous = env::var_os(DATA_DIR_ENV);
        // SAFETY: every writer of this variable holds `DATA_DIR_LOCK`.
        unsafe { env::set_var(DATA_DIR_ENV, value) };

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for DataDirOverride {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: the lock is still held; fields drop after this body.
        unsafe {
            match self.previous.take() {
                Some(value) => env::set_var(DATA_DIR_ENV, value),
                None => env::remove_var(DATA_DIR_ENV),
            }
        }
    }
}
