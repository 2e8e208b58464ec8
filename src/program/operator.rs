/// Represents a binary arithmetic operator.
///
/// All operators are left-associative. `Add` and `Sub` bind weaker than
/// `Mul`, `Div` and `Mod`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperatorKind {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floating-point remainder (`%`)
    Mod,
}

impl OperatorKind {
    /// Maps an operator character to its kind.
    ///
    /// ## Example
    /// ```
    /// use rpnexpr::OperatorKind;
    ///
    /// assert_eq!(OperatorKind::from_symbol('%'), Some(OperatorKind::Mod));
    /// assert_eq!(OperatorKind::from_symbol('^'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '%' => Some(Self::Mod),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
        }
    }

    /// Binding strength: 0 for `+ -`, 1 for `* / %`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 0,
            Self::Mul | Self::Div | Self::Mod => 1,
        }
    }

    /// Whether the operator may also be written as a prefix sign (`-x`, `+x`).
    #[must_use]
    pub const fn is_sign(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Applies the operator with `left` as the left-hand operand.
    ///
    /// Zero divisors follow IEEE-754: `1 / 0` is infinite and `1 % 0` is NaN.
    ///
    /// ## Example
    /// ```
    /// use rpnexpr::OperatorKind;
    ///
    /// assert_eq!(OperatorKind::Sub.apply(8.0, 3.0), 5.0);
    /// assert_eq!(OperatorKind::Mod.apply(-7.0, 4.0), -3.0);
    /// assert!(OperatorKind::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Mod => left % right,
        }
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
