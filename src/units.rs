// Decimal unit scaling for display values.

const DIVISORS: [(f64, &str); 4] = [(1e3, "k"), (1e6, "m"), (1e9, "g"), (1e12, "t")];

/// Scale `value` by the largest decimal divisor not exceeding it, prefixing
/// the matching letter to `base_unit`. Values below 1000 pass through.
pub fn scale(value: f64, base_unit: &str) -> (f64, String) {
    let mut scaled = value;
    let mut unit = base_unit.to_string();
    for (divisor, prefix) in DIVISORS {
        if value >= divisor {
            scaled = value / divisor;
            unit = format!("{prefix}{base_unit}");
        } else {
            break;
        }
    }
    (scaled, unit)
}
