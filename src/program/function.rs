use crate::error::{EvalError, EvalResult};

/// Type alias for function implementations.
///
/// An implementation receives exactly as many arguments as the function's
/// arity, in call order.
type FunctionImpl = fn(&[f64]) -> f64;

/// Defines the function catalog from a single table.
///
/// Each entry provides:
/// - the enum variant,
/// - the canonical name (first letter uppercase, rest lowercase),
/// - the arity,
/// - the implementation.
///
/// The macro produces the `FunctionKind` enum together with its name, arity
/// and implementation lookups, and `FunctionKind::ALL`.
macro_rules! function_catalog {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => {
                name: $name:literal,
                arity: $arity:literal,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Represents a built-in function.
        ///
        /// Functions are written with their canonical, case-sensitive name
        /// followed by a parenthesised argument list, e.g. `Atan(y, x)`.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum FunctionKind {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        impl FunctionKind {
            /// Every function in the catalog, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// The canonical name used in source text.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// The exact number of arguments the function consumes.
            #[must_use]
            pub const fn arity(self) -> usize {
                match self {
                    $(Self::$variant => $arity,)*
                }
            }

            /// Resolves a canonical name. Matching is exact and case-sensitive.
            ///
            /// ## Example
            /// ```
            /// use rpnexpr::FunctionKind;
            ///
            /// assert_eq!(FunctionKind::from_name("Sqrt"), Some(FunctionKind::Sqrt));
            /// assert_eq!(FunctionKind::from_name("SQRT"), None);
            /// assert_eq!(FunctionKind::from_name("sqrt"), None);
            /// ```
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }

            fn implementation(self) -> FunctionImpl {
                match self {
                    $(Self::$variant => $func,)*
                }
            }
        }
    };
}

function_catalog! {
    /// Sine of an angle in radians.
    Sin  => { name: "Sin",  arity: 1, func: |args: &[f64]| args[0].sin() },
    /// Cosine of an angle in radians.
    Cos  => { name: "Cos",  arity: 1, func: |args: &[f64]| args[0].cos() },
    /// Tangent of an angle in radians.
    Tan  => { name: "Tan",  arity: 1, func: |args: &[f64]| args[0].tan() },
    /// Arcsine, in radians.
    Asin => { name: "Asin", arity: 1, func: |args: &[f64]| args[0].asin() },
    /// Arccosine, in radians.
    Acos => { name: "Acos", arity: 1, func: |args: &[f64]| args[0].acos() },
    /// Two-argument arctangent: `Atan(y, x)` is the angle of the point `(x, y)`.
    Atan => { name: "Atan", arity: 2, func: |args: &[f64]| args[0].atan2(args[1]) },
    /// Square root.
    Sqrt => { name: "Sqrt", arity: 1, func: |args: &[f64]| args[0].sqrt() },
    /// Absolute value.
    Abs  => { name: "Abs",  arity: 1, func: |args: &[f64]| args[0].abs() },
}

impl FunctionKind {
    /// Applies the function to its arguments, given in call order.
    ///
    /// # Errors
    /// `InsufficientOperands` unless `args` holds exactly
    /// [`arity`](Self::arity) values.
    ///
    /// ## Example
    /// ```
    /// use rpnexpr::{EvalError, FunctionKind};
    ///
    /// assert_eq!(FunctionKind::Sqrt.apply(&[16.0]), Ok(4.0));
    /// assert_eq!(FunctionKind::Atan.apply(&[1.0, 0.0]), Ok(std::f64::consts::FRAC_PI_2));
    /// assert!(matches!(FunctionKind::Atan.apply(&[1.0]),
    ///                  Err(EvalError::InsufficientOperands { required: 2, available: 1, .. })));
    /// ```
    pub fn apply(self, args: &[f64]) -> EvalResult<f64> {
        if args.len() != self.arity() {
            return Err(EvalError::InsufficientOperands { operation: self.name().to_string(),
                                                         required:  self.arity(),
                                                         available: args.len(), });
        }
        Ok((self.implementation())(args))
    }
}

impl std::fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
