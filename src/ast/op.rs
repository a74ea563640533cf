//! Binary operator tags

use std::fmt;

use serde::{Deserialize, Serialize};

/// Binary operator
///
/// Serialized as its Tiger source symbol. Symbols outside the known set are
/// kept verbatim in [`BinaryOp::Other`] so that newer producers can hand us
/// trees we reject at evaluation instead of at load time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    /// A symbol outside the ten above. Build through `From` so that known
    /// symbols never end up here; see [`BinaryOp::normalized`].
    Other(String),
}

impl BinaryOp {
    /// Every operator the evaluator computes, arithmetic first
    pub const KNOWN: [BinaryOp; 10] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Eq,
        BinaryOp::Ne,
        BinaryOp::Lt,
        BinaryOp::Le,
        BinaryOp::Gt,
        BinaryOp::Ge,
    ];

    /// Map an `Other` holding a known symbol back to its proper variant
    pub fn normalized(self) -> Self {
        match self {
            BinaryOp::Other(symbol) => BinaryOp::from(symbol),
            known => known,
        }
    }

    /// Source symbol of this operator
    pub fn symbol(&self) -> &str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "=",
            BinaryOp::Ne => "<>",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Other(s) => s,
        }
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge
        )
    }
}

impl From<&str> for BinaryOp {
    fn from(symbol: &str) -> Self {
        match symbol {
            "+" => BinaryOp::Add,
            "-" => BinaryOp::Sub,
            "*" => BinaryOp::Mul,
            "/" => BinaryOp::Div,
            "=" => BinaryOp::Eq,
            "<>" => BinaryOp::Ne,
            "<" => BinaryOp::Lt,
            "<=" => BinaryOp::Le,
            ">" => BinaryOp::Gt,
            ">=" => BinaryOp::Ge,
            other => BinaryOp::Other(other.to_string()),
        }
    }
}

impl From<String> for BinaryOp {
    fn from(symbol: String) -> Self {
        match BinaryOp::from(symbol.as_str()) {
            BinaryOp::Other(_) => BinaryOp::Other(symbol),
            known => known,
        }
    }
}

impl From<BinaryOp> for String {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Other(s) => s,
            known => known.symbol().to_string(),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
