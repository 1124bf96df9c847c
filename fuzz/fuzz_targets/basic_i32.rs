#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use hyperion_fuzz_utils::{CommandSequence, RunnerState};
use std::fmt::{self, Debug, Formatter};

/// Key restricted to a window of 1024 values around zero
///
/// Arbitrary `i32`s almost never collide, which would leave the duplicate-key paths untested.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct WindowKey(i32);

// Forward the Debug implementation to the inner `i32` so that printing the fuzz input can be more
// easily replicated.
impl Debug for WindowKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'d> Arbitrary<'d> for WindowKey {
    fn arbitrary(u: &mut Unstructured<'d>) -> arbitrary::Result<Self> {
        Ok(WindowKey(u.int_in_range(-512_i32..=511)?))
    }
}

fuzz_target!(|cmds: CommandSequence<WindowKey>| {
    let cmds = cmds.map(|k| k.0);

    let mut runner: RunnerState<i32> = RunnerState::init();

    for c in cmds.cmds {
        runner.run_cmd(&c);
    }
});
