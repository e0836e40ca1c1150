//! Timer-driven animation state machines.
//!
//! Both machines are pure: they own their state, expose a `tick()`
//! transition, and leave all scheduling and cancellation to the component
//! that drives them. That keeps the timing logic testable off-browser.

mod counter;
mod typewriter;

pub use counter::{CountUp, CountUpConfig};
pub use typewriter::{Pacing, Typewriter};

use std::cell::Cell;
use std::rc::Rc;

/// Shared flag between a view and its pending timer callback.
///
/// The view raises it on teardown; a callback that fires afterwards sees
/// the flag and returns without touching any state.
#[derive(Clone, Default)]
pub struct CancelFlag(Rc<Cell<bool>>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn halt(&self) {
        self.0.set(true);
    }

    pub fn is_halted(&self) -> bool {
        self.0.get()
    }
}

/// Formats an integer with thousands separators, e.g. `25707` -> `"25,707"`.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{group_digits, CancelFlag, Pacing, Typewriter};

    #[test]
    fn halted_flag_blocks_a_late_tick() {
        let flag = CancelFlag::new();
        let mut tw = Typewriter::new(&["stair width"], Pacing::default());

        // The timer fires once while the view is alive...
        if !flag.is_halted() {
            tw.tick();
        }
        assert_eq!(tw.text(), "s");

        // ...then the view is torn down with another tick still queued.
        let clone_seen_by_callback = flag.clone();
        flag.halt();
        if !clone_seen_by_callback.is_halted() {
            tw.tick();
        }
        assert_eq!(tw.text(), "s", "late callback must not mutate state");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(14), "14");
        assert_eq!(group_digits(595), "595");
        assert_eq!(group_digits(4213), "4,213");
        assert_eq!(group_digits(25707), "25,707");
        assert_eq!(group_digits(1_234_567), "1,234,567");
    }
}
