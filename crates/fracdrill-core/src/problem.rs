//! Drill problems: two operands, an operator, and the expected answer.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::operator::Operator;
use crate::rational::{random_rational, Denominator, Rational};

/// One generated arithmetic question.
///
/// `want` is never negative: when `left op right` would be, the operands are
/// swapped so the displayed problem has a non-negative answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    left: Rational,
    right: Rational,
    operator: Operator,
    want: Rational,
}

impl Problem {
    pub fn new(left: Rational, right: Rational, operator: Operator) -> Self {
        let want = operator.apply(&left, &right);
        if want.is_negative() {
            Self {
                left: right,
                right: left,
                operator,
                want: -want,
            }
        } else {
            Self {
                left,
                right,
                operator,
                want,
            }
        }
    }

    /// Two independent random operands and a uniformly chosen operator.
    ///
    /// An empty operator set falls back to [`Operator::Add`].
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        denominator: Denominator,
        operators: &[Operator],
    ) -> Self {
        let left = random_rational(rng, denominator);
        let right = random_rational(rng, denominator);
        let operator = operators.choose(rng).copied().unwrap_or_default();
        Self::new(left, right, operator)
    }

    pub fn left(&self) -> &Rational {
        &self.left
    }

    pub fn right(&self) -> &Rational {
        &self.right
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The expected answer.
    pub fn want(&self) -> &Rational {
        &self.want
    }

    /// The question as shown to the user, including the trailing space.
    pub fn prompt(&self) -> String {
        format!("What is {} {} {}? ", self.left, self.operator, self.right)
    }
}
