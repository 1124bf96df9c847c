#![no_main]

use libfuzzer_sys::fuzz_target;
use hyperion_fuzz_utils::{CommandSequence, RunnerState};

// Small keys, so that duplicate insertions and repeated lookups actually happen
fuzz_target!(|cmds: CommandSequence<u8>| {
    let mut runner: RunnerState<u8> = RunnerState::init();

    for c in cmds.cmds {
        runner.run_cmd(&c);
    }
});
