// Human-readable magnitudes with SI prefixes

/// SI prefixes, descending by exponent
pub const UNITS: [(i32, &str); 13] = [
    (18, "E"),
    (15, "P"),
    (12, "T"),
    (9, "G"),
    (6, "M"),
    (3, "k"),
    (0, ""),
    (-3, "m"),
    (-6, "\u{b5}"),
    (-9, "n"),
    (-12, "p"),
    (-15, "f"),
    (-18, "a"),
];

/// Pick the largest unit whose exponent does not exceed `exp`.
/// NaN and -inf never match.
fn find_unit(exp: f64) -> Option<(i32, &'static str)> {
    UNITS.iter().copied().find(|(n, _)| f64::from(*n) <= exp)
}

/// Format `v` as `<value><prefix><suffix>`, e.g. `human(1500.0, "B", 1) == "1.5kB"`.
///
/// `sig` is the number of digits to keep after the leading one once the value
/// has been scaled into its unit. Zero, negative and non-finite magnitudes all
/// fall back to `"0" + suffix`.
pub fn human(v: f64, suffix: &str, sig: u32) -> String {
    if !v.is_finite() {
        return format!("0{}", suffix);
    }

    let exp = v.log10().floor();
    let (threshold, symbol) = match find_unit(exp) {
        Some(unit) => unit,
        None => return format!("0{}", suffix),
    };

    let scaled = v / 10f64.powi(threshold);
    let exp = scaled.log10().floor();
    let sig = f64::from(sig);

    let rounded = if exp < sig {
        let factor = 10f64.powf(sig - exp);
        (scaled * factor).round() / factor
    } else {
        scaled.round()
    };

    format!("{}{}{}", rounded, symbol, suffix)
}
