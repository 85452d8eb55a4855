extern crate chocolate_charts as charts;
extern crate failure;

use charts::scoreboard::{first_occurrence, parse_pattern, scores_after};
use charts::time_it;
use failure::Error;
use std::io::Read;
use std::str::FromStr;

static SCORE_CHECKS: &'static [(usize, &'static str)] = &[
    (9, "5158916779"),
    (5, "0124515891"),
    (18, "9251071085"),
    (2018, "5941429882"),
];

static INDEX_CHECKS: &'static [(&'static str, usize)] = &[
    ("51589", 9),
    ("01245", 5),
    ("92510", 18),
    ("59414", 2018),
];

/// Run both queries against recipes with known answers. A mismatch means the
/// scoreboard logic has regressed, so panic before touching the real input.
fn self_check() {
    for &(n, expected) in SCORE_CHECKS {
        assert_eq!(scores_after(n), expected, "scores after {}", n);
    }
    for &(pattern, expected) in INDEX_CHECKS {
        let pattern = parse_pattern(pattern).unwrap();
        assert_eq!(first_occurrence(&pattern), expected, "first occurrence of {:?}", pattern);
    }
}

fn main() -> Result<(), Error> {
    let mut input = String::new();
    {
        let stdin = std::io::stdin();
        stdin.lock().read_to_string(&mut input)?;
    }
    let input = input.trim();

    self_check();

    let count = usize::from_str(input)?;
    println!("{}", time_it("scores after", || scores_after(count)));

    let pattern = parse_pattern(input)?;
    println!("{}", time_it("first occurrence", || first_occurrence(&pattern)));

    Ok(())
}
