/// Plot a formula and print the chart description as JSON
///
/// Usage:
///   cargo run --example plot_formula -- "2*tri((f-3)/4) - rect((f)/2)"
///   cargo run --example plot_formula -- --closed-form "rect((f)/4)"
use signal_plot::{ChartConfig, parse, plot, plot_closed_form};

fn main() {
    let mut closed_form = false;
    let mut formula = String::new();
    for arg in std::env::args().skip(1) {
        if arg == "--closed-form" {
            closed_form = true;
        } else {
            if !formula.is_empty() {
                formula.push(' ');
            }
            formula.push_str(&arg);
        }
    }
    if formula.is_empty() {
        formula = "sinc(f) + 0.5*rect(f - 2)".to_string();
    }

    if !closed_form {
        let parsed = parse(&formula);
        for diagnostic in &parsed.diagnostics {
            eprintln!("warning: {}", diagnostic);
        }
        eprintln!("parsed as: {}", parsed.expr);
    }

    let result = if closed_form {
        plot_closed_form(&formula)
    } else {
        plot(&formula)
    };
    eprintln!(
        "domain [{}, {}], {} points, area {}",
        result.domain_min,
        result.domain_max,
        result.points.len(),
        result.area
    );

    match ChartConfig::from(&result).to_json_pretty() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
