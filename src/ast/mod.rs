//! Abstract Syntax Tree for Tiger expressions
//!
//! This module defines the expression tree handed to the evaluator. Trees are
//! built elsewhere (a parser, a JSON dump, or the shorthand constructors in
//! [`build`]) and are never mutated once evaluation starts.

mod build;
mod op;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use op::BinaryOp;

/// Expression node
///
/// The variant set is closed. Every consumer must handle each variant
/// explicitly, even when the handling is a rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    IntegerLiteral(IntegerLiteral),
    StringLiteral(StringLiteral),
    BinaryOperator(BinaryOperator),
    Sequence(Sequence),
    IfThenElse(IfThenElse),
    Identifier(Identifier),
    Let(Let),
    VarDecl(VarDecl),
    FunDecl(FunDecl),
    FunCall(FunCall),
    WhileLoop(WhileLoop),
    ForLoop(ForLoop),
    Break(Break),
    Assign(Assign),
}

impl Expr {
    /// The discriminant of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::IntegerLiteral(_) => NodeKind::IntegerLiteral,
            Expr::StringLiteral(_) => NodeKind::StringLiteral,
            Expr::BinaryOperator(_) => NodeKind::BinaryOperator,
            Expr::Sequence(_) => NodeKind::Sequence,
            Expr::IfThenElse(_) => NodeKind::IfThenElse,
            Expr::Identifier(_) => NodeKind::Identifier,
            Expr::Let(_) => NodeKind::Let,
            Expr::VarDecl(_) => NodeKind::VarDecl,
            Expr::FunDecl(_) => NodeKind::FunDecl,
            Expr::FunCall(_) => NodeKind::FunCall,
            Expr::WhileLoop(_) => NodeKind::WhileLoop,
            Expr::ForLoop(_) => NodeKind::ForLoop,
            Expr::Break(_) => NodeKind::Break,
            Expr::Assign(_) => NodeKind::Assign,
        }
    }
}

/// Node kind, without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    IntegerLiteral,
    StringLiteral,
    BinaryOperator,
    Sequence,
    IfThenElse,
    Identifier,
    Let,
    VarDecl,
    FunDecl,
    FunCall,
    WhileLoop,
    ForLoop,
    Break,
    Assign,
}

impl NodeKind {
    /// All node kinds, in declaration order
    pub const ALL: [NodeKind; 14] = [
        NodeKind::IntegerLiteral,
        NodeKind::StringLiteral,
        NodeKind::BinaryOperator,
        NodeKind::Sequence,
        NodeKind::IfThenElse,
        NodeKind::Identifier,
        NodeKind::Let,
        NodeKind::VarDecl,
        NodeKind::FunDecl,
        NodeKind::FunCall,
        NodeKind::WhileLoop,
        NodeKind::ForLoop,
        NodeKind::Break,
        NodeKind::Assign,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NodeKind::IntegerLiteral => "IntegerLiteral",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::BinaryOperator => "BinaryOperator",
            NodeKind::Sequence => "Sequence",
            NodeKind::IfThenElse => "IfThenElse",
            NodeKind::Identifier => "Identifier",
            NodeKind::Let => "Let",
            NodeKind::VarDecl => "VarDecl",
            NodeKind::FunDecl => "FunDecl",
            NodeKind::FunCall => "FunCall",
            NodeKind::WhileLoop => "WhileLoop",
            NodeKind::ForLoop => "ForLoop",
            NodeKind::Break => "Break",
            NodeKind::Assign => "Assign",
        }
    }

    /// Whether the evaluator computes a value for this kind
    pub fn is_evaluable(self) -> bool {
        matches!(
            self,
            NodeKind::IntegerLiteral
                | NodeKind::BinaryOperator
                | NodeKind::Sequence
                | NodeKind::IfThenElse
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ==================== LITERALS ====================

/// 32-bit signed integer literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerLiteral {
    pub value: i32,
}

/// String literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
}

// ==================== OPERATORS ====================

/// Binary operation `left op right`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryOperator {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

// ==================== CONTROL FLOW ====================

/// `(e1; e2; ...; en)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    pub exprs: Vec<Expr>,
}

/// `if condition then then_part else else_part`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfThenElse {
    pub condition: Box<Expr>,
    pub then_part: Box<Expr>,
    pub else_part: Box<Expr>,
}

/// `while condition do body`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhileLoop {
    pub condition: Box<Expr>,
    pub body: Box<Expr>,
}

/// `for variable := low to high do body`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForLoop {
    pub variable: String,
    pub low: Box<Expr>,
    pub high: Box<Expr>,
    pub body: Box<Expr>,
}

/// `break`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break;

// ==================== BINDINGS ====================

/// Reference to a variable by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

/// `let decls in body end`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Let {
    pub decls: Vec<Expr>,
    pub body: Box<Sequence>,
}

/// `var name : type_name := init`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarDecl {
    pub name: String,
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub init: Option<Box<Expr>>,
}

/// `function name(params) : type_name = body`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunDecl {
    pub name: String,
    #[serde(default)]
    pub params: Vec<VarDecl>,
    #[serde(default)]
    pub type_name: Option<String>,
    pub body: Box<Expr>,
}

/// `name(args)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunCall {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Expr>,
}

/// `lhs := rhs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assign {
    pub lhs: Identifier,
    pub rhs: Box<Expr>,
}
