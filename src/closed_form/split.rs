/// Split a normalized formula into its top-level additive terms.
///
/// A `+` or `-` outside every parenthesis starts a new term and stays at the
/// front of it, so `"a-b+c"` yields `["a", "-b", "+c"]`. Parenthesized
/// content is never split. Stray `)` do not drive the depth below zero.
/// A sign at the very start does not produce an empty first term.
///
/// ```
/// use signal_plot::closed_form::split_top_level;
///
/// assert_eq!(
///     split_top_level("rect((f)/2)+tri((f-3)/4)"),
///     ["rect((f)/2)", "+tri((f-3)/4)"]
/// );
/// assert_eq!(split_top_level("rect((f+1)/2)"), ["rect((f+1)/2)"]);
/// ```
pub fn split_top_level(expr: &str) -> Vec<&str> {
    let mut terms = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in expr.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '+' | '-' if depth == 0 => {
                if i > start {
                    terms.push(&expr[start..i]);
                }
                start = i;
            }
            _ => {}
        }
    }

    if expr.len() > start {
        terms.push(&expr[start..]);
    }

    terms
}
