//! The process-wide default first weekday.
//!
//! Every calendar function takes the first weekday explicitly. This default is
//! only consulted by convenience constructors such as [`Week::new`](crate::Week::new).
//!
//! The setting is shared by all threads. Reads and writes are individually
//! atomic, but overriding it is meant for cooperative, non-concurrent use: two
//! threads overriding it at the same time will observe each other's values.

use std::sync::{Mutex, MutexGuard, PoisonError};

use lazy_static::lazy_static;

use crate::date::Weekday;

lazy_static! {
    static ref FIRST_WEEKDAY: Mutex<Weekday> = Mutex::new(Weekday::Monday);
}

fn lock() -> MutexGuard<'static, Weekday> {
    // A Weekday is always valid, so a poisoned lock holds usable data.
    FIRST_WEEKDAY
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// The current default first weekday. Initially Monday.
pub fn first_weekday() -> Weekday {
    *lock()
}

/// Sets the default first weekday and returns the previous one.
pub fn set_first_weekday(first_weekday: Weekday) -> Weekday {
    let previous = std::mem::replace(&mut *lock(), first_weekday);
    debug!("default first weekday changed from {previous} to {first_weekday}");
    previous
}

/// Restores the previous default first weekday when dropped.
#[derive(Debug)]
pub struct FirstWeekdayGuard {
    previous: Weekday,
}

impl Drop for FirstWeekdayGuard {
    fn drop(&mut self) {
        set_first_weekday(self.previous);
    }
}

/// Installs `first_weekday` as the default until the returned guard is dropped.
#[must_use = "the previous first weekday is restored as soon as the guard is dropped"]
pub fn override_first_weekday(first_weekday: Weekday) -> FirstWeekdayGuard {
    FirstWeekdayGuard {
        previous: set_first_weekday(first_weekday),
    }
}

/// Runs `f` with `first_weekday` as the default, restoring the previous value
/// afterwards, also when `f` panics.
pub fn with_first_weekday<R>(first_weekday: Weekday, f: impl FnOnce() -> R) -> R {
    let _guard = override_first_weekday(first_weekday);
    f()
}
