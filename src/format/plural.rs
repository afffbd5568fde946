// Pluralizing templates: "[singular|plural]" branches picked by the nearest count
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// Matches "[singular|plural]" branches inside a literal segment
    static ref BRANCH_PATTERN: Regex = Regex::new(r"\[([^|]*)\|([^\]]*)\]").unwrap();
}

/// A value interpolated into a pluralizing template
#[derive(Debug, Clone, PartialEq)]
pub enum PluralArg {
    /// A number that is both the count and the displayed label
    Count(f64),
    /// A count displayed through a separate label, e.g. `(3, "three")`
    Labeled { count: f64, label: String },
    /// Anything non-numeric; displayed, never selects a branch
    Text(String),
}

impl PluralArg {
    fn count(&self) -> Option<f64> {
        match self {
            PluralArg::Count(n) => Some(*n),
            PluralArg::Labeled { count, .. } => Some(*count),
            PluralArg::Text(_) => None,
        }
    }
}

impl fmt::Display for PluralArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluralArg::Count(n) => write!(f, "{}", n),
            PluralArg::Labeled { label, .. } => write!(f, "{}", label),
            PluralArg::Text(s) => write!(f, "{}", s),
        }
    }
}

macro_rules! impl_count_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for PluralArg {
                fn from(n: $t) -> Self {
                    PluralArg::Count(n as f64)
                }
            }
        )*
    };
}

impl_count_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for PluralArg {
    fn from(s: &str) -> Self {
        PluralArg::Text(s.to_string())
    }
}

impl From<String> for PluralArg {
    fn from(s: String) -> Self {
        PluralArg::Text(s)
    }
}

impl<N: Into<f64>, L: fmt::Display> From<(N, L)> for PluralArg {
    fn from((count, label): (N, L)) -> Self {
        PluralArg::Labeled {
            count: count.into(),
            label: label.to_string(),
        }
    }
}

fn apply_branches(segment: &str, count: Option<f64>) -> String {
    match count {
        Some(n) => {
            let replacement = if n == 1.0 { "${1}" } else { "${2}" };
            BRANCH_PATTERN.replace_all(segment, replacement).into_owned()
        }
        None => segment.to_string(),
    }
}

/// Join literal `segments` with `args` interleaved, resolving every
/// `[singular|plural]` branch in a segment against the count in effect.
///
/// The first segment looks ahead to the first argument; every later segment
/// uses the argument interpolated right before it. Segments past the last
/// argument are still emitted.
pub fn simplur(segments: &[&str], args: &[PluralArg]) -> String {
    let mut result = String::new();
    let mut args = args.iter();
    let mut current = args.as_slice().first();

    for segment in segments {
        result.push_str(&apply_branches(segment, current.and_then(PluralArg::count)));

        // Once the values run out, later segments keep the last count
        if let Some(arg) = args.next() {
            result.push_str(&arg.to_string());
            current = Some(arg);
        }
    }

    result
}

/// Split a `{}`-placeholder template into literal segments.
pub fn template_segments(template: &str) -> Vec<&str> {
    template.split("{}").collect()
}

/// `simplur!("{} item[|s]", n)`: like `format!` with plural branches.
#[macro_export]
macro_rules! simplur {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format::plural::simplur(
            &$crate::format::plural::template_segments($template),
            &[$($crate::format::plural::PluralArg::from($arg)),*],
        )
    };
}
