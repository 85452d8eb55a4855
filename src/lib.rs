#[macro_use]
extern crate failure;
extern crate itertools;

use std::time::Instant;

pub mod scoreboard;

/// Run `f`, reporting its wall-clock time on stderr under `label`. The value
/// `f` returns is passed through untouched.
pub fn time_it<T, F>(label: &str, f: F) -> T
where F: FnOnce() -> T
{
    let start = Instant::now();
    let value = f();
    eprintln!("{}: {:?}", label, start.elapsed());
    value
}

#[test]
fn test_time_it_passes_value_through() {
    assert_eq!(time_it("answer", || 6 * 7), 42);
}
