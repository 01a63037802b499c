use crate::{Diagnostic, PulseKind, Signal, SignalDescriptor, parse_formula, split_top_level};

fn pulse(amplitude: f64, kind: PulseKind, center: f64, param: f64) -> SignalDescriptor {
    SignalDescriptor {
        amplitude,
        kind,
        center,
        param,
    }
}

#[test]
fn test_sum_of_pulses() {
    let cf = parse_formula("rect((f)/2) + 2*tri((f-3)/4)");
    assert!(cf.diagnostics.is_empty());
    assert_eq!(
        cf.descriptors,
        vec![
            pulse(1.0, PulseKind::Rect, 0.0, 2.0),
            pulse(2.0, PulseKind::Tri, 3.0, 4.0),
        ]
    );
}

#[test]
fn test_signs_and_shifts() {
    let cf = parse_formula("-rect((t+1)/0.5) - 0.5*tri((f-2.5)/1)");
    assert_eq!(
        cf.descriptors,
        vec![
            pulse(-1.0, PulseKind::Rect, -1.0, 0.5),
            pulse(-0.5, PulseKind::Tri, 2.5, 1.0),
        ]
    );
}

#[test]
fn test_input_is_normalized() {
    let cf = parse_formula("  3 * RECT( (F - 2) / 4 )");
    assert_eq!(cf.descriptors, vec![pulse(3.0, PulseKind::Rect, 2.0, 4.0)]);

    let cf = parse_formula("TRI((T)/1)");
    assert_eq!(cf.descriptors, vec![pulse(1.0, PulseKind::Tri, 0.0, 1.0)]);
}

#[test]
fn test_unsupported_terms_are_dropped() {
    let cf = parse_formula("rect((f-1)/2) + sinc(f) - tri((f)/0)");
    assert_eq!(cf.descriptors, vec![pulse(1.0, PulseKind::Rect, 1.0, 2.0)]);
    assert_eq!(cf.diagnostics.len(), 2);
    assert!(matches!(cf.diagnostics[0], Diagnostic::UnrecognizedTerm { .. }));
    assert!(matches!(cf.diagnostics[1], Diagnostic::DegeneratePulse { .. }));
}

#[test]
fn test_general_syntax_is_not_closed_form() {
    // valid for the general parser, but not a pulse with (f - c)/w argument
    for formula in ["rect(f)", "rect(f/2)", "2rect((f)/2)", "rect((2*f)/2)", "f"] {
        let cf = parse_formula(formula);
        assert!(cf.descriptors.is_empty(), "{formula}");
        assert_eq!(cf.diagnostics.len(), 1, "{formula}");
    }
}

#[test]
fn test_empty_formula() {
    let cf = parse_formula("");
    assert!(cf.descriptors.is_empty());
    assert!(cf.diagnostics.is_empty());
    assert_eq!(cf.value_at(0.0), 0.0);
}

#[test]
fn test_closed_form_values() {
    let cf = parse_formula("rect((f)/2) - tri((f-1)/1)");
    assert_eq!(cf.value_at(0.0), 1.0);
    assert_eq!(cf.value_at(0.5), 0.5);
    assert_eq!(cf.value_at(1.0), 0.0);
    assert_eq!(cf.value_at(1.5), -0.5);
    assert_eq!(cf.value_at(5.0), 0.0);
}

#[test]
fn test_split_keeps_groups_whole() {
    assert_eq!(
        split_top_level("rect((f)/2)-2*tri((f-3)/4)+rect((f+1)/1)"),
        ["rect((f)/2)", "-2*tri((f-3)/4)", "+rect((f+1)/1)"]
    );
    assert_eq!(split_top_level("(a+b)-(c-d)"), ["(a+b)", "-(c-d)"]);
    assert_eq!(split_top_level("-a"), ["-a"]);
}
