//! Expression tree node types.
//!
//! Formulas from a model document (kinetic laws, rule right-hand sides,
//! constraint math, event assignments) arrive as immutable trees of [`Expr`]
//! nodes. The tree is produced by an external loading layer; this crate only
//! renders it. Every node kind has a fixed arity, and a node never contains
//! itself as a descendant.

/// Named constants that appear as leaf nodes.
///
/// NaN and the infinities are represented here rather than as numeric
/// literals, so the number formatter only ever sees finite values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// The circle constant, rendered as `\pi`.
    Pi,
    /// Euler's number, rendered as `\mathrm{e}`.
    E,
    /// Boolean true.
    True,
    /// Boolean false.
    False,
    /// Positive infinity.
    Infinity,
    /// Negative infinity.
    NegInfinity,
    /// Simulation time (a csymbol in the source document).
    Time,
    /// Delay marker (a csymbol in the source document).
    Delay,
}

/// Unary operator kinds.
///
/// The first seven have their own structural rendering rules; the rest are
/// function-style operators drawn from the source document's trig,
/// hyperbolic, and logarithm vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryKind {
    Negate,
    Sqrt,
    Abs,
    Ceiling,
    Floor,
    Factorial,
    Not,
    Exp,
    Ln,
    Log10,
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Csc,
    Sinh,
    Cosh,
    Tanh,
    Coth,
    Sech,
    Csch,
    Arcsin,
    Arccos,
    Arctan,
    Arccot,
    Arcsec,
    Arccsc,
    Arcsinh,
    Arccosh,
    Arctanh,
    Arccoth,
    Arcsech,
    Arccsch,
}

impl UnaryKind {
    /// Whether this is an inverse (arc) function.
    ///
    /// Inverse functions only bracket a compound operand; the other
    /// function-style operators always wrap their operand in their own
    /// delimiter pair.
    pub fn is_inverse(self) -> bool {
        matches!(
            self,
            UnaryKind::Arcsin
                | UnaryKind::Arccos
                | UnaryKind::Arctan
                | UnaryKind::Arccot
                | UnaryKind::Arcsec
                | UnaryKind::Arccsc
                | UnaryKind::Arcsinh
                | UnaryKind::Arccosh
                | UnaryKind::Arctanh
                | UnaryKind::Arccoth
                | UnaryKind::Arcsech
                | UnaryKind::Arccsch
        )
    }
}

/// Binary operator kinds. Both have exactly two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryKind {
    /// `base ^ exponent`.
    Power,
    /// Rendered as a fraction.
    Divide,
}

/// N-ary operator kinds. At least two operands each; operand order is
/// semantically significant and preserved exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NaryKind {
    Plus,
    Minus,
    Times,
    And,
    Or,
    Xor,
}

/// Relational operator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Eq,
    Neq,
    Lt,
    Leq,
    Gt,
    Geq,
}

/// A node in an expression tree.
///
/// Immutable once built; rendering a node is a pure function of the node,
/// the symbol environment, and the render configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Floating-point literal. Always finite (see [`Constant`]).
    Number(f64),
    /// Integer literal.
    Integer(i64),
    /// Rational literal, numerator over denominator.
    Rational(f64, f64),
    /// Bare identifier, classified against the model at render time.
    Ident(String),
    /// Named constant.
    Constant(Constant),
    /// Unary operator application.
    Unary(UnaryKind, Box<Expr>),
    /// Binary operator application.
    Binary(BinaryKind, Box<Expr>, Box<Expr>),
    /// N-ary operator application over two or more operands.
    Nary(NaryKind, Vec<Expr>),
    /// Relational comparison.
    Relation(RelationKind, Box<Expr>, Box<Expr>),
    /// Call of a user-defined function.
    Call(String, Vec<Expr>),
    /// Indexed radical. An index of literal 2 degrades to a plain square
    /// root when rendered.
    Root {
        index: Box<Expr>,
        radicand: Box<Expr>,
    },
    /// Function definition body with named parameters.
    Lambda { params: Vec<String>, body: Box<Expr> },
    /// Piecewise definition: `(value, condition)` pairs plus an optional
    /// fallback value.
    Piecewise {
        pieces: Vec<(Expr, Expr)>,
        otherwise: Option<Box<Expr>>,
    },
}

impl Expr {
    /// Number of direct children, following the source document's
    /// element-count convention: a lambda counts its parameters plus the
    /// body, a piecewise counts every value and condition element.
    pub fn child_count(&self) -> usize {
        match self {
            Expr::Number(_)
            | Expr::Integer(_)
            | Expr::Rational(..)
            | Expr::Ident(_)
            | Expr::Constant(_) => 0,
            Expr::Unary(_, _) => 1,
            Expr::Binary(..) | Expr::Relation(..) | Expr::Root { .. } => 2,
            Expr::Nary(_, operands) => operands.len(),
            Expr::Call(_, args) => args.len(),
            Expr::Lambda { params, .. } => params.len() + 1,
            Expr::Piecewise { pieces, otherwise } => {
                pieces.len() * 2 + usize::from(otherwise.is_some())
            }
        }
    }

    /// Whether this node has children. Drives the structural bracket rules.
    pub fn is_compound(&self) -> bool {
        self.child_count() > 0
    }

    /// Whether this node is a PLUS or MINUS sum.
    pub(crate) fn is_sum(&self) -> bool {
        matches!(self, Expr::Nary(NaryKind::Plus | NaryKind::Minus, _))
    }

    // Convenience constructors, so callers and tests can assemble trees
    // without spelling out Box::new everywhere.

    /// Floating-point literal.
    pub fn num(value: f64) -> Expr {
        Expr::Number(value)
    }

    /// Integer literal.
    pub fn int(value: i64) -> Expr {
        Expr::Integer(value)
    }

    /// Identifier leaf.
    pub fn ident(name: impl Into<String>) -> Expr {
        Expr::Ident(name.into())
    }

    /// Unary application.
    pub fn unary(kind: UnaryKind, operand: Expr) -> Expr {
        Expr::Unary(kind, Box::new(operand))
    }

    /// Unary negation.
    pub fn neg(operand: Expr) -> Expr {
        Expr::unary(UnaryKind::Negate, operand)
    }

    /// Square root.
    pub fn sqrt(operand: Expr) -> Expr {
        Expr::unary(UnaryKind::Sqrt, operand)
    }

    /// Indexed radical.
    pub fn root(index: Expr, radicand: Expr) -> Expr {
        Expr::Root {
            index: Box::new(index),
            radicand: Box::new(radicand),
        }
    }

    /// `base ^ exponent`.
    pub fn pow(base: Expr, exponent: Expr) -> Expr {
        Expr::Binary(BinaryKind::Power, Box::new(base), Box::new(exponent))
    }

    /// Fraction.
    pub fn divide(numerator: Expr, denominator: Expr) -> Expr {
        Expr::Binary(BinaryKind::Divide, Box::new(numerator), Box::new(denominator))
    }

    /// N-ary sum.
    pub fn plus(operands: Vec<Expr>) -> Expr {
        Expr::Nary(NaryKind::Plus, operands)
    }

    /// N-ary difference.
    pub fn minus(operands: Vec<Expr>) -> Expr {
        Expr::Nary(NaryKind::Minus, operands)
    }

    /// N-ary product.
    pub fn times(operands: Vec<Expr>) -> Expr {
        Expr::Nary(NaryKind::Times, operands)
    }

    /// Relational comparison.
    pub fn relation(kind: RelationKind, left: Expr, right: Expr) -> Expr {
        Expr::Relation(kind, Box::new(left), Box::new(right))
    }

    /// Equality comparison.
    pub fn eq(left: Expr, right: Expr) -> Expr {
        Expr::relation(RelationKind::Eq, left, right)
    }

    /// Less-than comparison.
    pub fn lt(left: Expr, right: Expr) -> Expr {
        Expr::relation(RelationKind::Lt, left, right)
    }

    /// Call of a user-defined function.
    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Expr {
        Expr::Call(name.into(), args)
    }

    /// Function definition body.
    pub fn lambda(params: Vec<&str>, body: Expr) -> Expr {
        Expr::Lambda {
            params: params.into_iter().map(String::from).collect(),
            body: Box::new(body),
        }
    }

    /// Piecewise definition.
    pub fn piecewise(pieces: Vec<(Expr, Expr)>, otherwise: Option<Expr>) -> Expr {
        Expr::Piecewise {
            pieces,
            otherwise: otherwise.map(Box::new),
        }
    }
}
