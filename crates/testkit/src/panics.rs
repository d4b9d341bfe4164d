//! Process-wide panic hook management for tests that panic on purpose.

use std::panic;
use std::sync::Once;

static SILENCE: Once = Once::new();

/// Install a no-op panic hook once for the whole test process.
///
/// Suites that deliberately drive computations into a panic (to observe it
/// being captured) call this first, so each captured panic does not spray a
/// message and backtrace over the test output. The hook stays installed for
/// the remainder of the process, which is why this lives in the testkit and
/// not in the library: installing hooks is the embedding process's call.
pub fn silence_panic_hook() {
    SILENCE.call_once(|| {
        panic::set_hook(Box::new(|_| {}));
    });
}
