use std::f64::consts::{E, PI};

/// Constants available to every expression, by name.
///
/// The table is immutable and shared process-wide. A caller binding with the
/// same name takes precedence.
pub static CONSTANTS: [(&str, f64); 2] = [("pi", PI), ("e", E)];

/// Looks a name up in the constant table.
///
/// ## Example
/// ```
/// use rpnexpr::evaluator::constants::lookup;
///
/// assert_eq!(lookup("pi"), Some(std::f64::consts::PI));
/// assert_eq!(lookup("PI"), None);
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<f64> {
    CONSTANTS.iter()
             .find(|(constant, _)| *constant == name)
             .map(|(_, value)| *value)
}
