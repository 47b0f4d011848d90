//! Text forms: printed numbers, and the fault dump of the grid with the
//! fish's cell highlighted.

use crate::grid::Grid;
use crate::stack::Stack;

const HIGHLIGHT: &str = "\u{1b}[42m";
const RESET: &str = "\u{1b}[0m";

/// Formats a value the way `n` prints it: shortest decimal digits, switching
/// to exponent form (`1e+21`, `1e-05`) when the exponent is below -4 or at
/// least 21.
pub fn number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if v == 0.0 {
        return format!("{v}");
    }
    let sci = format!("{v:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{v}");
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if exp < -4 || exp >= 21 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    } else {
        format!("{v}")
    }
}

pub fn grid_with_cursor(grid: &Grid, cx: usize, cy: usize) -> String {
    let mut s = String::new();
    for (y, row) in grid.rows().enumerate() {
        for (x, &b) in row.iter().enumerate() {
            let c = char::from(b);
            if (x, y) == (cx, cy) {
                s.push_str(HIGHLIGHT);
                s.push(c);
                s.push_str(RESET);
            } else {
                s.push(c);
            }
        }
        s.push('\n');
    }
    s
}

pub fn stack_dump(stack: &Stack) -> String {
    let values: Vec<String> = stack.values().iter().map(|&v| number(v)).collect();
    format!("Stack: [{}]", values.join(" "))
}
