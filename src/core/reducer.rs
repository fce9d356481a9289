//! Digit-sum reduction with master-number exceptions.
//!
//! Rules are evaluated in order and the first match wins:
//!
//! 1. `n <= 19` or master: `n`
//! 2. `r1 = digits(n)`
//! 3. `r1` master: `r1`
//! 4. `r1 <= 19`, `n < 100`: `n/r1`
//! 5. `r1 <= 19`, `n >= 100`: `r1`
//! 6. `r2 = digits(r1)`
//! 7. `r2` master: `r2`
//! 8. `n >= 100`, `r1 > 19`: `r1/r2` when `r2 <= 19`, else `r1/r3` with `r3 = digits(r2)`
//! 9. otherwise: `n/r2`
//!
//! Rule 9 pairs the original `n` with `r2`. Interpretation keys depend on that
//! exact format, so it stays.

use crate::domain::model::{NumerologyNumber, ReductionTrace};

pub const MASTER_NUMBERS: [u128; 9] = [11, 22, 33, 44, 55, 66, 77, 88, 99];

pub fn is_master_number(n: u128) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Sum of base-10 digits; `0` sums to `0`.
pub fn sum_digits(mut n: u128) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += (n % 10) as u32;
        n /= 10;
    }
    sum
}

struct Reduction {
    initial: u128,
    r1: Option<u32>,
    r2: Option<u32>,
    r3: Option<u32>,
    log: Vec<String>,
}

impl Reduction {
    fn new(initial: u128) -> Self {
        Self {
            initial,
            r1: None,
            r2: None,
            r3: None,
            log: vec![format!("Reducing: {}", initial)],
        }
    }

    fn step(&mut self, line: String) {
        self.log.push(format!(" -> {}", line));
    }

    fn finish(mut self, rule: &str, final_number: NumerologyNumber) -> ReductionTrace {
        self.step(format!("{}. Final: {}", rule, final_number));
        ReductionTrace {
            initial: Some(self.initial),
            r1: self.r1,
            r2: self.r2,
            r3: self.r3,
            final_number,
            log: self.log.join("\n"),
        }
    }
}

// only reached with values <= 99, or digit sums of a u128 (at most 351)
fn single_or_master(n: u32) -> NumerologyNumber {
    if is_master_number(u128::from(n)) {
        NumerologyNumber::Master(n)
    } else {
        NumerologyNumber::Single(n)
    }
}

/// Reduces a raw total to its displayed numerology code.
pub fn reduce_number(n: u128) -> ReductionTrace {
    let mut reduction = Reduction::new(n);

    if n <= 19 || is_master_number(n) {
        // both cases fit in u32
        return reduction.finish(
            "Rule 1: Initial <= 19 or Master",
            single_or_master(n as u32),
        );
    }

    let r1 = sum_digits(n);
    reduction.r1 = Some(r1);
    reduction.step(format!("R1 = sum_digits({}) = {}", n, r1));

    if is_master_number(u128::from(r1)) {
        return reduction.finish("Rule 3: R1 is Master", NumerologyNumber::Master(r1));
    }

    if r1 <= 19 && n < 100 {
        return reduction.finish(
            "Rule 4: R1 <= 19 and num < 100",
            NumerologyNumber::Compound {
                initial: n as u32,
                reduced: r1,
            },
        );
    }

    if r1 <= 19 {
        return reduction.finish("Rule 5: R1 <= 19 and num >= 100", NumerologyNumber::Single(r1));
    }

    let r2 = sum_digits(u128::from(r1));
    reduction.r2 = Some(r2);
    reduction.step(format!("R2 = sum_digits({}) = {}", r1, r2));

    if is_master_number(u128::from(r2)) {
        return reduction.finish("Rule 7: R2 is Master", NumerologyNumber::Master(r2));
    }

    if n >= 100 {
        if r2 <= 19 {
            return reduction.finish(
                "Rule 8a: num >= 100, R1 > 19, R2 <= 19",
                NumerologyNumber::Compound {
                    initial: r1,
                    reduced: r2,
                },
            );
        }

        let r3 = sum_digits(u128::from(r2));
        reduction.r3 = Some(r3);
        reduction.step(format!("R3 = sum_digits({}) = {}", r2, r3));
        return reduction.finish(
            "Rule 8b: num >= 100, R1 > 19, R2 > 19",
            NumerologyNumber::Compound {
                initial: r1,
                reduced: r3,
            },
        );
    }

    // n < 100 here, so the cast is lossless
    reduction.finish(
        "Rule 9: Default (num < 100, R1 > 19)",
        NumerologyNumber::Compound {
            initial: n as u32,
            reduced: r2,
        },
    )
}

/// Signed entry point: negative totals are reported, not reduced.
pub fn reduce_signed(n: i128) -> ReductionTrace {
    match u128::try_from(n) {
        Ok(value) => reduce_number(value),
        Err(_) => {
            tracing::debug!(value = %n, "refusing to reduce negative value");
            ReductionTrace {
                initial: None,
                r1: None,
                r2: None,
                r3: None,
                final_number: NumerologyNumber::InvalidInput,
                log: format!(
                    "Reducing: {}\n -> Input must be a non-negative integer. Final: {}",
                    n,
                    NumerologyNumber::InvalidInput
                ),
            }
        }
    }
}
