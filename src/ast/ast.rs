use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Expression Types
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum ExprType {
    Number,
    Variable,
    BinaryOp,
    Call,
    Prototype,
    Function,
}

impl Display for ExprType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Expression
///
/// The closed set of node shapes a parser builds from the token stream.
/// Every node owns its children; trees are immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Variable(String),
    BinaryOp {
        operator: u8,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        callee: String,
        args: Vec<Expr>,
    },
    Prototype(Prototype),
    Function(Function),
}

/// Function signature: a name and its ordered parameters.
///
/// Parameters are expected to be `Variable` nodes; [`Prototype::param_names`]
/// reports anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub signature: Prototype,
    pub body: Box<Expr>,
}

impl Expr {
    pub fn number(value: f64) -> Self {
        Expr::Number(value)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn binary(operator: u8, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(callee: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: callee.into(),
            args,
        }
    }

    pub fn prototype(name: impl Into<String>, params: Vec<Expr>) -> Self {
        Expr::Prototype(Prototype {
            name: name.into(),
            params,
        })
    }

    pub fn function(signature: Prototype, body: Expr) -> Self {
        Expr::Function(Function {
            signature,
            body: Box::new(body),
        })
    }

    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Number(_) => ExprType::Number,
            Expr::Variable(_) => ExprType::Variable,
            Expr::BinaryOp { .. } => ExprType::BinaryOp,
            Expr::Call { .. } => ExprType::Call,
            Expr::Prototype(_) => ExprType::Prototype,
            Expr::Function(_) => ExprType::Function,
        }
    }

    /// Direct sub-expressions, in source order. A function yields its
    /// parameters before its body.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Number(_) | Expr::Variable(_) => vec![],
            Expr::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Expr::Call { args, .. } => args.iter().collect(),
            Expr::Prototype(prototype) => prototype.params.iter().collect(),
            Expr::Function(function) => function
                .signature
                .params
                .iter()
                .chain(std::iter::once(function.body.as_ref()))
                .collect(),
        }
    }

    /// Pre-order traversal of the whole tree.
    pub fn walk<'a, F: FnMut(&'a Expr)>(&'a self, f: &mut F) {
        f(self);
        for child in self.children() {
            child.walk(f);
        }
    }
}

impl Prototype {
    pub fn new(name: impl Into<String>, params: Vec<Expr>) -> Self {
        Prototype {
            name: name.into(),
            params,
        }
    }

    pub fn param_names(&self) -> Result<Vec<&str>, Error> {
        self.params
            .iter()
            .map(|param| match param {
                Expr::Variable(name) => Ok(name.as_str()),
                other => Err(Error::new(
                    ErrorImpl::UnexpectedNode {
                        expected: ExprType::Variable.to_string(),
                        received: other.get_expr_type().to_string(),
                    },
                    Position::null(),
                )),
            })
            .collect()
    }
}

fn write_list(f: &mut std::fmt::Formatter<'_>, items: &[Expr]) -> std::fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl Display for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.name)?;
        write_list(f, &self.params)?;
        write!(f, ")")
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::BinaryOp {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, char::from(*operator), right),
            Expr::Call { callee, args } => {
                write!(f, "{}(", callee)?;
                write_list(f, args)?;
                write!(f, ")")
            }
            Expr::Prototype(prototype) => write!(f, "extern {}", prototype),
            Expr::Function(function) => write!(f, "def {} {}", function.signature, function.body),
        }
    }
}
