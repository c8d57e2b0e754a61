//! Small recursion exercises, most in both iterative and recursive form.
//!
//! None of these share any state with the graph code. They're the classic
//! warm-ups for thinking recursively: peel off a base case, and express the
//! rest in terms of a smaller instance of the same problem.

use std::fmt;

/// Compute `a * b` by adding up `b` copies of `a`, or `None` if the sum
/// overflows an `i64`.
pub fn mult_iter(a: i64, b: u32) -> Option<i64> {
    let mut result: i64 = 0;
    for _ in 0..b {
        result = result.checked_add(a)?;
    }
    Some(result)
}

/// Compute `a * b` as `a + a * (b - 1)`, or `None` on overflow.
pub fn mult(a: i64, b: u32) -> Option<i64> {
    if b == 0 {
        Some(0)
    } else {
        mult(a, b - 1)?.checked_add(a)
    }
}

pub fn iter_power(base: f64, exp: u32) -> f64 {
    let mut result = 1.0;
    for _ in 0..exp {
        result *= base;
    }
    result
}

pub fn recur_power(base: f64, exp: u32) -> f64 {
    if exp == 0 {
        1.0
    } else {
        base * recur_power(base, exp - 1)
    }
}

/// Return `n!`, or `None` if it doesn't fit in a `u64`.
pub fn factorial_iter(n: u64) -> Option<u64> {
    (1..=n).try_fold(1u64, |prod, i| prod.checked_mul(i))
}

/// Return `n!`, or `None` if it doesn't fit in a `u64`.
pub fn factorial(n: u64) -> Option<u64> {
    if n <= 1 {
        Some(1)
    } else {
        factorial(n - 1)?.checked_mul(n)
    }
}

/// Find the greatest common divisor of `a` and `b` by counting down from the
/// smaller of the two until we find a number dividing both.
///
/// If either argument is zero, the answer is the other one.
pub fn gcd_iter(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return a.max(b);
    }
    let mut test = a.min(b);
    while a % test != 0 || b % test != 0 {
        test -= 1;
    }
    test
}

/// Euclid's algorithm.
pub fn gcd_recur(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd_recur(b, a % b)
    }
}

/// The naive doubly-recursive Fibonacci, with `fib(0) == fib(1) == 1`.
pub fn fib(x: u32) -> u64 {
    if x <= 1 {
        1
    } else {
        fib(x - 1) + fib(x - 2)
    }
}

/// A single Towers of Hanoi move: the top disk of `from` goes to `to`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Move<'a> {
    pub from: &'a str,
    pub to: &'a str
}

impl<'a> fmt::Display for Move<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "move from {} to {}", self.from, self.to)
    }
}

/// Move a stack of `n` disks from `from` to `to`, using `spare` as scratch
/// space, passing each move to `emit` in the order it should be made.
///
/// The stack of `n - 1` disks above the bottom one goes to `spare`, the bottom
/// disk goes to `to`, and then the `n - 1` disks follow it from `spare`.
pub fn towers<'a, F>(n: u32, from: &'a str, to: &'a str, spare: &'a str, emit: &mut F)
    where F: FnMut(Move<'a>)
{
    if n == 0 {
        return;
    }
    if n == 1 {
        emit(Move { from, to });
        return;
    }
    towers(n - 1, from, spare, to, emit);
    towers(1, from, to, spare, emit);
    towers(n - 1, spare, to, from, emit);
}

/// Return the full list of moves `towers` would make.
pub fn towers_moves<'a>(n: u32, from: &'a str, to: &'a str, spare: &'a str) -> Vec<Move<'a>> {
    let mut moves = Vec::new();
    towers(n, from, to, spare, &mut |m| moves.push(m));
    moves
}

/// Return every subset of `items`, each in the order its elements appear in
/// `items`.
///
/// The subsets of all but the last item come first, followed by each of those
/// with the last item added.
pub fn gen_subsets<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let (extra, rest) = match items.split_last() {
        None => return vec![vec![]],
        Some(split) => split
    };

    let smaller = gen_subsets(rest);
    let new: Vec<Vec<T>> = smaller.iter()
        .map(|small| {
            let mut subset = small.clone();
            subset.push(extra.clone());
            subset
        })
        .collect();

    let mut all = smaller;
    all.extend(new);
    all
}

/// Return true if `s` reads the same backwards, considering only ASCII letters
/// and ignoring case.
pub fn is_palindrome(s: &str) -> bool {
    fn is_pal(chars: &[char]) -> bool {
        match chars.len() {
            0 | 1 => true,
            n => chars[0] == chars[n - 1] && is_pal(&chars[1..n - 1])
        }
    }

    let letters: Vec<char> = s.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    is_pal(&letters)
}

/// Return true if `ch` occurs in `sorted`, whose characters must be in
/// increasing order, by binary search.
pub fn is_in(ch: char, sorted: &str) -> bool {
    fn search(ch: char, chars: &[char]) -> bool {
        match chars.len() {
            0 => false,
            1 => chars[0] == ch,
            n => {
                let mid = n / 2;
                if ch == chars[mid] {
                    true
                } else if ch < chars[mid] {
                    search(ch, &chars[..mid])
                } else {
                    search(ch, &chars[mid + 1..])
                }
            }
        }
    }

    let chars: Vec<char> = sorted.chars().collect();
    search(ch, &chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplication() {
        for a in -3..4 {
            for b in 0..6 {
                assert_eq!(mult_iter(a, b), Some(a * b as i64));
                assert_eq!(mult(a, b), Some(a * b as i64));
            }
        }
    }

    #[test]
    fn multiplication_overflow() {
        assert_eq!(mult_iter(i64::MAX, 1), Some(i64::MAX));
        assert_eq!(mult(i64::MAX, 1), Some(i64::MAX));
        assert_eq!(mult_iter(i64::MAX, 2), None);
        assert_eq!(mult(i64::MAX, 2), None);
        assert_eq!(mult_iter(i64::MIN, 2), None);
        assert_eq!(mult(i64::MIN, 2), None);
        assert_eq!(mult(i64::MIN, 1), Some(i64::MIN));
        assert_eq!(mult_iter(i64::MAX / 2, 2), Some(i64::MAX - 1));
    }

    #[test]
    fn powers() {
        assert_eq!(iter_power(2.0, 10), 1024.0);
        assert_eq!(recur_power(2.0, 10), 1024.0);
        assert_eq!(iter_power(0.5, 3), 0.125);
        assert_eq!(recur_power(-3.0, 3), -27.0);
        assert_eq!(iter_power(7.5, 0), 1.0);
        assert_eq!(recur_power(0.0, 0), 1.0);
    }

    #[test]
    fn factorials() {
        let expected = [1, 1, 2, 6, 24, 120, 720];
        for (n, &f) in expected.iter().enumerate() {
            assert_eq!(factorial_iter(n as u64), Some(f));
            assert_eq!(factorial(n as u64), Some(f));
        }
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial_iter(21), None);
        assert_eq!(factorial(21), None);
    }

    #[test]
    fn gcds() {
        for &(a, b, d) in &[(1071, 462, 21), (462, 1071, 21), (17, 5, 1),
                             (12, 12, 12), (9, 27, 9)] {
            assert_eq!(gcd_iter(a, b), d);
            assert_eq!(gcd_recur(a, b), d);
        }
        assert_eq!(gcd_recur(0, 1), 1);
        assert_eq!(gcd_recur(1, 0), 1);
        assert_eq!(gcd_iter(0, 1), 1);
        assert_eq!(gcd_iter(1, 0), 1);
    }

    #[test]
    fn fibonacci() {
        let firsts: Vec<u64> = (0..10).map(fib).collect();
        assert_eq!(firsts, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
    }

    #[test]
    fn hanoi_two() {
        let moves = towers_moves(2, "a", "b", "spare");
        let printed: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        assert_eq!(printed, vec!["move from a to spare",
                                 "move from a to b",
                                 "move from spare to b"]);
    }

    #[test]
    fn hanoi_counts() {
        assert!(towers_moves(0, "a", "b", "c").is_empty());
        for n in 1..10 {
            assert_eq!(towers_moves(n, "a", "b", "c").len(), (1 << n) - 1);
        }
    }

    #[test]
    fn hanoi_is_legal() {
        // Replay the moves on real pegs, checking that no disk ever lands on
        // a smaller one and that everything ends up on "b".
        let n = 6;
        let mut pegs: Vec<(&str, Vec<u32>)> = vec![("a", (1..=n).rev().collect()),
                                                   ("b", vec![]),
                                                   ("c", vec![])];
        for m in towers_moves(n, "a", "b", "c") {
            let from = pegs.iter().position(|p| p.0 == m.from).unwrap();
            let to = pegs.iter().position(|p| p.0 == m.to).unwrap();
            let disk = pegs[from].1.pop().unwrap();
            if let Some(&top) = pegs[to].1.last() {
                assert!(top > disk, "disk {} placed on {}", disk, top);
            }
            pegs[to].1.push(disk);
        }
        assert_eq!(pegs[1].1, (1..=n).rev().collect::<Vec<_>>());
    }

    #[test]
    fn subsets() {
        assert_eq!(gen_subsets::<u32>(&[]), vec![Vec::<u32>::new()]);
        assert_eq!(gen_subsets(&[1, 2]),
                   vec![vec![], vec![1], vec![2], vec![1, 2]]);
        assert_eq!(gen_subsets(&['a', 'b', 'c']).len(), 8);
        assert_same_elements!(gen_subsets(&[1, 2, 3]),
                              vec![vec![], vec![1], vec![2], vec![3],
                                   vec![1, 2], vec![1, 3], vec![2, 3], vec![1, 2, 3]]);
    }

    #[test]
    fn palindromes() {
        assert!(is_palindrome("ABba"));
        assert!(!is_palindrome("ABcd"));
        assert!(is_palindrome("A man, a plan, a canal: Panama"));
        assert!(is_palindrome(""));
        assert!(is_palindrome("!?"));
        assert!(!is_palindrome("ab"));
    }

    #[test]
    fn binary_search() {
        let alphabet = "abcdefghijklmnopqrstuvwxyz";
        for ch in alphabet.chars() {
            assert!(is_in(ch, alphabet));
        }
        assert!(!is_in('a', ""));
        assert!(is_in('m', "m"));
        assert!(!is_in('m', "n"));
        assert!(is_in('e', "acegi"));
        assert!(!is_in('d', "acegi"));
        assert!(!is_in('z', "acegi"));
        assert!(!is_in('A', "acegi"));
    }
}
