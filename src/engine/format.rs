use rhai::Dynamic;

/// Value a formula cell holds after a failed evaluation.
pub const ERROR_SENTINEL: &str = "#ERR!";

/// Format an evaluation result for cell storage.
pub fn format_dynamic(value: &Dynamic) -> String {
    if value.is_unit() {
        String::new()
    } else if let Ok(n) = value.as_float() {
        format_number(n)
    } else if let Ok(n) = value.as_int() {
        n.to_string()
    } else if let Ok(b) = value.as_bool() {
        if b { "TRUE" } else { "FALSE" }.to_string()
    } else if let Ok(s) = value.clone().into_string() {
        s
    } else {
        format!("{:?}", value)
    }
}

/// Format a float, dropping the fraction for whole numbers.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e10 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}
