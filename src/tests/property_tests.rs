//! Property-Based and Fuzz Testing
//!
//! Uses quickcheck for property-based testing of:
//! - Parser robustness (fuzz testing)
//! - Evaluation of literal arithmetic
//! - Sampler output invariants

use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};

use crate::{Sampler, parse, parse_formula, plot_closed_form};

// ============================================================
// PART 1: FORMULA GENERATORS FOR PROPERTY TESTS
// ============================================================

/// Generate random formula strings in the general grammar
fn random_formula(g: &mut Gen) -> String {
    let depth = g.size().min(4); // Limit depth to keep formulas readable
    gen_formula_recursive(g, depth)
}

fn gen_formula_recursive(g: &mut Gen, depth: usize) -> String {
    if depth == 0 {
        let choice: u8 = u8::arbitrary(g) % 4;
        return match choice {
            0 => format!("{}", u8::arbitrary(g) % 20),
            1 => format!("{}.{}", u8::arbitrary(g) % 10, u8::arbitrary(g) % 100),
            2 => "pi".to_string(),
            _ => "f".to_string(),
        };
    }

    let choice: u8 = u8::arbitrary(g) % 10;
    match choice {
        0..=3 => {
            let ops = ["+", "-", "*", "/"];
            let op = ops[usize::arbitrary(g) % ops.len()];
            let left = gen_formula_recursive(g, depth - 1);
            let right = gen_formula_recursive(g, depth - 1);
            format!("({} {} {})", left, op, right)
        }
        4..=6 => {
            let fns = [
                "rect", "tri", "sinc", "gauss", "exp", "step", "delta", "sin", "cos", "tan",
                "abs", "sqrt",
            ];
            let f = fns[usize::arbitrary(g) % fns.len()];
            let arg = gen_formula_recursive(g, depth - 1);
            format!("{}({})", f, arg)
        }
        7 => format!("-{}", gen_formula_recursive(g, depth - 1)),
        _ => gen_formula_recursive(g, depth - 1),
    }
}

/// Random sum of closed-form pulses
fn random_pulse_sum(g: &mut Gen) -> String {
    let terms = 1 + usize::arbitrary(g) % 4;
    let mut out = String::new();
    for i in 0..terms {
        let sign = if bool::arbitrary(g) { "-" } else { "+" };
        if i > 0 || sign == "-" {
            out.push_str(sign);
        }
        let amplitude = 1 + u8::arbitrary(g) % 9;
        let kind = if bool::arbitrary(g) { "rect" } else { "tri" };
        let shift = i8::arbitrary(g) % 40;
        let shift_sign = if shift < 0 { "+" } else { "-" };
        let width = 1 + u8::arbitrary(g) % 20;
        out.push_str(&format!(
            "{}*{}((f{}{})/{})",
            amplitude,
            kind,
            shift_sign,
            shift.unsigned_abs(),
            width
        ));
    }
    out
}

// ============================================================
// PART 2: PARSER FUZZ TESTS
// ============================================================

#[cfg(test)]
mod parser_fuzz_tests {
    use super::*;

    /// Property: Parser should never panic on arbitrary input
    #[test]
    fn test_parser_never_panics_on_random_input() {
        fn prop_parser_no_panic(input: String) -> TestResult {
            let parsed = parse(&input);
            // a tree always comes back, and non-fatal parses evaluate
            let _ = parsed.expr.eval(0.5);
            TestResult::passed()
        }
        QuickCheck::new()
            .tests(1000)
            .max_tests(2000)
            .quickcheck(prop_parser_no_panic as fn(String) -> TestResult);
    }

    /// Property: Closed-form parser never panics either
    #[test]
    fn test_closed_form_never_panics_on_random_input() {
        fn prop_closed_form_no_panic(input: String) -> TestResult {
            let cf = parse_formula(&input);
            TestResult::from_bool(cf.descriptors.iter().all(|d| d.param != 0.0))
        }
        QuickCheck::new()
            .tests(1000)
            .quickcheck(prop_closed_form_no_panic as fn(String) -> TestResult);
    }

    /// Property: Generated formulas use only known syntax
    #[test]
    fn test_generated_formulas_parse_cleanly() {
        let mut g = Gen::new(10);
        for _ in 0..300 {
            let formula = random_formula(&mut g);
            let parsed = parse(&formula);
            assert!(parsed.is_clean(), "{}: {:?}", formula, parsed.diagnostics);
        }
    }

    /// Property: Display output parses back to the same tree
    #[test]
    fn test_display_round_trip() {
        let mut g = Gen::new(6);
        for _ in 0..200 {
            let formula = random_formula(&mut g);
            let first = parse(&formula).expr;
            let shown = first.to_string();
            let second = parse(&shown);
            assert!(second.is_clean(), "{} -> {}", formula, shown);
            assert_eq!(first, second.expr, "{} -> {}", formula, shown);
        }
    }

    /// Fuzz test with specifically crafted edge cases
    #[test]
    fn test_parser_edge_cases() {
        let edge_cases = [
            "",
            "   ",
            "()",
            "((()))",
            "+++",
            "---f",
            "1+",
            "+1",
            "sin()",
            "sin(f,f)",
            "1..2",
            "1e5",
            "1/0",
            "0/0",
            "(-0)",
            "∞",
            "π",
            "İ",
            "rect((f)/2",
            ")))",
        ];

        for case in &edge_cases {
            let parsed = parse(case);
            assert!(!parsed.is_fatal(), "{}", case);
        }
    }
}

// ============================================================
// PART 3: EVALUATION PROPERTIES
// ============================================================

#[cfg(test)]
mod evaluation_tests {
    use super::*;

    /// Property: Integer arithmetic evaluates exactly
    #[test]
    fn test_literal_arithmetic_agrees() {
        fn prop_arith(a: u16, b: u16, c: u16) -> bool {
            let (fa, fb, fc) = (a as f64, b as f64, c as f64);
            let sum = parse(&format!("{}+{}*{}", a, b, c)).expr.eval(0.0);
            let diff = parse(&format!("({}-{})*{}", a, b, c)).expr.eval(0.0);
            let quot = parse(&format!("{}/({}+1)", a, b)).expr.eval(0.0);
            sum == fa + fb * fc && diff == (fa - fb) * fc && quot == fa / (fb + 1.0)
        }
        QuickCheck::new()
            .tests(500)
            .quickcheck(prop_arith as fn(u16, u16, u16) -> bool);
    }

    /// Property: Negation and subtraction are consistent
    #[test]
    fn test_negation_is_subtraction_from_zero() {
        fn prop_neg(a: u16, x: i16) -> bool {
            let x = x as f64 / 10.0;
            let neg = parse(&format!("-(f*{})", a)).expr.eval(x);
            let sub = parse(&format!("0-f*{}", a)).expr.eval(x);
            neg == sub
        }
        QuickCheck::new()
            .tests(500)
            .quickcheck(prop_neg as fn(u16, i16) -> bool);
    }
}

// ============================================================
// PART 4: SAMPLER PROPERTIES
// ============================================================

#[cfg(test)]
mod sampler_property_tests {
    use super::*;

    /// Property: Area is non-negative, points are finite and increasing
    #[test]
    fn test_plot_invariants() {
        let sampler = Sampler::new().search_steps(400);
        let mut g = Gen::new(8);
        for _ in 0..100 {
            let formula = random_formula(&mut g);
            let result = sampler.plot(&formula);
            assert!(result.area >= 0.0, "{}: area {}", formula, result.area);
            assert!(result.domain_min < result.domain_max, "{}", formula);
            assert!(result.points.len() <= 401);
            assert!(result.points.iter().all(|p| p.y.is_finite()));
            assert!(result.points.windows(2).all(|w| w[0].x < w[1].x));
        }
    }

    /// Property: Closed-form domain always covers the origin and every pulse
    #[test]
    fn test_closed_form_domain_covers_pulses() {
        let mut g = Gen::new(8);
        for _ in 0..100 {
            let formula = random_pulse_sum(&mut g);
            let cf = parse_formula(&formula);
            assert!(cf.diagnostics.is_empty(), "{}: {:?}", formula, cf.diagnostics);

            let result = plot_closed_form(&formula);
            assert!(result.domain_min <= -10.0 && result.domain_max >= 10.0);
            for d in &cf.descriptors {
                let (lo, hi) = d.extent();
                assert!(result.domain_min <= lo && hi <= result.domain_max, "{}", formula);
            }
            assert_eq!(result.points.len(), 4001);
            assert!(result.area >= 0.0);
        }
    }
}
