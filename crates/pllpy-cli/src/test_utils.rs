//! Environment isolation for handler tests.
//!
//! Handlers read `PLL_INSTALL_DIR`; tests that set or clear it hold
//! `ENV_LOCK` for their whole body.

use std::env;
use std::sync::Mutex;

/// Serializes tests that touch the process environment.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Restores one environment variable when dropped.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvVarGuard {
    #[allow(unsafe_code)]
    pub fn set(key: &'static str, value: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::set_var(key, value);
        }
        Self { key, previous }
    }

    #[allow(unsafe_code)]
    pub fn remove(key: &'static str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::remove_var(key);
        }
        Self { key, previous }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        unsafe {
            match &self.previous {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}
