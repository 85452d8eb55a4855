//! A scoreboard of hot chocolate recipe scores, grown by two elves.
//!
//! The board starts as `[3, 7]` with one elf at each score. Each round the
//! elves combine their current recipes: the digits of the sum are appended
//! to the board, and then each elf moves forward one plus their current
//! score, wrapping around. The two queries below differ only in when they
//! stop growing the board and what they read off it.

use failure::Error;
use itertools::Itertools;

struct Scoreboard {
    scores: Vec<u8>,
    elves: [usize; 2],
}

impl Scoreboard {
    fn new() -> Scoreboard {
        Scoreboard {
            scores: vec![3, 7],
            elves: [0, 1],
        }
    }

    /// Combine the two current recipes, appending one or two scores to the
    /// board, and move each elf to its next recipe.
    fn step(&mut self) {
        let sum = self.scores[self.elves[0]] + self.scores[self.elves[1]];
        if sum >= 10 {
            self.scores.push(sum / 10);
        }
        self.scores.push(sum % 10);

        // The elves still point at pre-step scores, so it doesn't matter
        // that the board has already grown; only the modulus changes.
        for elf in &mut self.elves {
            *elf = (*elf + 1 + self.scores[*elf] as usize) % self.scores.len();
        }
    }
}

/// Return the ten scores that follow the first `n` on the board, as a string
/// of digits.
pub fn scores_after(n: usize) -> String {
    let mut board = Scoreboard::new();
    while board.scores.len() < n + 10 {
        board.step();
    }
    board.scores[n..n + 10].iter().join("")
}

/// Return the index at which `pattern` first appears on the board.
///
/// A round can append two scores at once, so the occurrence we're waiting
/// for may end at the last score or one before it; both windows are checked
/// each time around, earlier one first so the smallest index wins.
pub fn first_occurrence(pattern: &[u8]) -> usize {
    assert!(!pattern.is_empty());
    let mut board = Scoreboard::new();
    loop {
        let len = board.scores.len();
        if len > pattern.len() && board.scores[len - pattern.len() - 1..len - 1] == *pattern {
            return len - pattern.len() - 1;
        }
        if len >= pattern.len() && board.scores[len - pattern.len()..] == *pattern {
            return len - pattern.len();
        }
        board.step();
    }
}

/// Parse a pattern of score digits. Leading zeros are significant: the
/// pattern is an ordered sequence of digits, not a number.
pub fn parse_pattern(s: &str) -> Result<Vec<u8>, Error> {
    s.chars()
        .map(|ch| match ch.to_digit(10) {
            Some(digit) => Ok(digit as u8),
            None => Err(format_err!("bad digit in pattern: {:?}", ch)),
        })
        .collect()
}

#[test]
fn test_scores_after() {
    assert_eq!(scores_after(9), "5158916779");
    assert_eq!(scores_after(5), "0124515891");
    assert_eq!(scores_after(18), "9251071085");
    assert_eq!(scores_after(2018), "5941429882");
}

#[test]
fn test_scores_after_near_the_seed() {
    // Asking right at the front still has to grow the two-score seed out to
    // a full ten-digit window.
    assert_eq!(scores_after(0), "3710101245");
    assert_eq!(scores_after(1), "7101012451");
}

#[test]
fn test_step_growth() {
    let mut board = Scoreboard::new();
    for _ in 0..1000 {
        let before = board.scores.len();
        board.step();
        let added = board.scores.len() - before;
        assert!(added == 1 || added == 2);
        assert!(board.scores[before..].iter().all(|&score| score < 10));
        for &elf in &board.elves {
            assert!(elf < board.scores.len());
        }
    }
}

#[test]
fn test_first_occurrence() {
    assert_eq!(first_occurrence(&[5, 1, 5, 8, 9]), 9);
    assert_eq!(first_occurrence(&[0, 1, 2, 4, 5]), 5);
    assert_eq!(first_occurrence(&[9, 2, 5, 1, 0]), 18);
    assert_eq!(first_occurrence(&[5, 9, 4, 1, 4]), 2018);
}

#[test]
fn test_first_occurrence_in_seed() {
    assert_eq!(first_occurrence(&[3, 7]), 0);
    assert_eq!(first_occurrence(&[3]), 0);
    assert_eq!(first_occurrence(&[7]), 1);
}

#[test]
fn test_first_occurrence_is_earliest() {
    let pattern = parse_pattern("59414").unwrap();
    let index = first_occurrence(&pattern);

    let mut board = Scoreboard::new();
    while board.scores.len() < index + pattern.len() {
        board.step();
    }
    assert_eq!(board.scores[index..index + pattern.len()], pattern[..]);
    for earlier in 0..index {
        assert_ne!(board.scores[earlier..earlier + pattern.len()], pattern[..]);
    }
}

#[test]
fn test_parse_pattern() {
    assert_eq!(parse_pattern("01245").unwrap(), vec![0, 1, 2, 4, 5]);
    assert_eq!(parse_pattern("9").unwrap(), vec![9]);
    assert!(parse_pattern("51x89").is_err());
    assert!(parse_pattern("-1234").is_err());
}
