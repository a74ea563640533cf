//! Shorthand constructors for building trees in code

use super::*;

impl Expr {
    pub fn int(value: i32) -> Self {
        Expr::IntegerLiteral(IntegerLiteral { value })
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::StringLiteral(StringLiteral {
            value: value.into(),
        })
    }

    pub fn binary(op: impl Into<BinaryOp>, left: Expr, right: Expr) -> Self {
        Expr::BinaryOperator(BinaryOperator {
            op: op.into().normalized(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn seq(exprs: Vec<Expr>) -> Self {
        Expr::Sequence(Sequence { exprs })
    }

    pub fn if_then_else(condition: Expr, then_part: Expr, else_part: Expr) -> Self {
        Expr::IfThenElse(IfThenElse {
            condition: Box::new(condition),
            then_part: Box::new(then_part),
            else_part: Box::new(else_part),
        })
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(Identifier { name: name.into() })
    }

    pub fn let_in(decls: Vec<Expr>, body: Vec<Expr>) -> Self {
        Expr::Let(Let {
            decls,
            body: Box::new(Sequence { exprs: body }),
        })
    }

    pub fn var_decl(name: impl Into<String>, init: Expr) -> Self {
        Expr::VarDecl(VarDecl {
            name: name.into(),
            type_name: None,
            init: Some(Box::new(init)),
        })
    }

    pub fn fun_decl(name: impl Into<String>, params: Vec<VarDecl>, body: Expr) -> Self {
        Expr::FunDecl(FunDecl {
            name: name.into(),
            params,
            type_name: None,
            body: Box::new(body),
        })
    }

    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::FunCall(FunCall {
            name: name.into(),
            args,
        })
    }

    pub fn while_loop(condition: Expr, body: Expr) -> Self {
        Expr::WhileLoop(WhileLoop {
            condition: Box::new(condition),
            body: Box::new(body),
        })
    }

    pub fn for_loop(variable: impl Into<String>, low: Expr, high: Expr, body: Expr) -> Self {
        Expr::ForLoop(ForLoop {
            variable: variable.into(),
            low: Box::new(low),
            high: Box::new(high),
            body: Box::new(body),
        })
    }

    pub fn brk() -> Self {
        Expr::Break(Break)
    }

    pub fn assign(name: impl Into<String>, rhs: Expr) -> Self {
        Expr::Assign(Assign {
            lhs: Identifier { name: name.into() },
            rhs: Box::new(rhs),
        })
    }
}
