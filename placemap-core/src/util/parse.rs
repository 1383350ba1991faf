/// Locale-independent float parsing. Only values that parse to a
/// finite number are accepted.
pub fn parse_coord(value: &str) -> Option<f64> {
    let n: f64 = value.trim().parse().ok()?;
    n.is_finite().then_some(n)
}
