//! Arithmetic operators a problem can use.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::rational::Rational;

/// A binary operation over fractions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Operator {
    #[default]
    Add,
    Sub,
}

type BinaryOp = fn(&Rational, &Rational) -> Rational;

fn add(left: &Rational, right: &Rational) -> Rational {
    left + right
}

fn sub(left: &Rational, right: &Rational) -> Rational {
    left - right
}

/// Per-operator flag name, display symbol and function.
static TABLE: [(Operator, &str, &str, BinaryOp); 2] = [
    (Operator::Add, "ADD", "+", add),
    (Operator::Sub, "SUB", "-", sub),
];

impl Operator {
    /// Every supported operator.
    pub const ALL: [Operator; 2] = [Operator::Add, Operator::Sub];

    fn entry(self) -> &'static (Operator, &'static str, &'static str, BinaryOp) {
        &TABLE[self as usize]
    }

    /// Name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        self.entry().1
    }

    /// Symbol shown in prompts.
    pub fn symbol(self) -> &'static str {
        self.entry().2
    }

    /// Apply the operation to `left` and `right`.
    pub fn apply(self, left: &Rational, right: &Rational) -> Rational {
        (self.entry().3)(left, right)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TABLE
            .iter()
            .find(|(_, name, _, _)| name.eq_ignore_ascii_case(wanted))
            .map(|(op, _, _, _)| *op)
            .ok_or_else(|| {
                format!(
                    "unknown operator: {wanted} (choices: {})",
                    Operator::ALL.map(Operator::name).join(", ")
                )
            })
    }
}

impl TryFrom<String> for Operator {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
