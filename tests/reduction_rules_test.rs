use numerology::core::reducer::{is_master_number, reduce_number, reduce_signed, sum_digits};
use numerology::NumerologyNumber;

#[test]
fn test_values_up_to_nineteen_and_masters_are_unchanged() {
    let masters = [11u128, 22, 33, 44, 55, 66, 77, 88, 99];
    for n in (0..=19u128).chain(masters) {
        let trace = reduce_number(n);
        assert_eq!(trace.final_number.to_string(), n.to_string());
        assert_eq!(trace.initial, Some(n));
        assert_eq!((trace.r1, trace.r2, trace.r3), (None, None, None));
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(reduce_number(23).final_number.to_string(), "23/5");
    assert_eq!(reduce_number(137).final_number.to_string(), "11");
    assert_eq!(reduce_number(259).final_number.to_string(), "16");
    // life path total for 1994-01-07
    assert_eq!(reduce_number(31).final_number.to_string(), "31/4");
}

#[test]
fn test_every_two_digit_total_is_compound_or_master() {
    for n in 20..100u128 {
        let trace = reduce_number(n);
        let r1 = sum_digits(n);
        if is_master_number(n) {
            assert_eq!(trace.final_number, NumerologyNumber::Master(n as u32));
        } else if is_master_number(u128::from(r1)) {
            // 29, 38, ..., 92
            assert_eq!(trace.final_number, NumerologyNumber::Master(r1));
        } else {
            assert_eq!(
                trace.final_number,
                NumerologyNumber::Compound {
                    initial: n as u32,
                    reduced: r1
                },
                "n = {}",
                n
            );
        }
    }
}

#[test]
fn test_three_digit_totals_never_keep_the_original() {
    for n in 100..1000u128 {
        let rendered = reduce_number(n).final_number.to_string();
        assert!(
            !rendered.starts_with(&format!("{}/", n)),
            "{} reduced to {}",
            n,
            rendered
        );
    }
}

#[test]
fn test_third_reduction_branch() {
    // digit sum 299 needs 34 digits
    let n = 3 * 10u128.pow(33) - 1;
    let trace = reduce_number(n);
    assert_eq!(trace.r1, Some(299));
    assert_eq!(trace.r2, Some(20));
    assert_eq!(trace.r3, Some(2));
    assert_eq!(trace.final_number.to_string(), "299/2");
    assert!(trace.log.contains("Rule 8b"));
}

#[test]
fn test_negative_input_reports_invalid() {
    let trace = reduce_signed(-1);
    assert_eq!(trace.final_number.to_string(), "Invalid Input");
    assert_eq!(trace.initial, None);
}
