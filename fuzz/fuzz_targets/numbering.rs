/*
 * Released under the terms of the Apache 2.0 license with LLVM
 * exception. See `LICENSE` for details.
 */

#![no_main]
use libfuzzer_sys::fuzz_target;
use pathprof::fuzzing::numbering;

fuzz_target!(|test_case: numbering::TestCase| {
    let _ = env_logger::try_init();
    numbering::check(test_case);
});
