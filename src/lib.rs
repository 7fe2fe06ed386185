//! # sbmltex
//!
//! Renders the mathematics of SBML-style reaction network models as LaTeX.
//!
//! The central piece is a pure, recursive renderer that turns a typed
//! expression tree (rate laws, rule right-hand sides, constraints, event
//! assignments) into math-mode text, classifying identifiers against a
//! read-only symbol environment: species render in concentration brackets
//! when their quantity is dimensionally a concentration, compartments render
//! through their size function, and everything else renders as plain
//! identifier text. Numeric literals use the shortest decimal representation
//! that round-trips exactly, with large and small magnitudes split into
//! power-of-ten factors.
//!
//! ## Quick Start
//!
//! ```
//! use sbmltex::{Expr, RenderConfig, SpeciesInfo, SymbolEnvironment, render_math};
//!
//! let mut env = SymbolEnvironment::new();
//! env.add_species(SpeciesInfo::new("S1"));
//!
//! // k1 * S1, a mass-action rate law
//! let rate = Expr::times(vec![Expr::ident("k1"), Expr::ident("S1")]);
//!
//! let latex = render_math(&rate, &env, &RenderConfig::default());
//! assert_eq!(latex, "\\mathtt{k1}\\cdot \\left[\\mathtt{S1}\\right]");
//! ```
//!
//! Rendering is deterministic and shares no mutable state: the same tree,
//! environment, and configuration always produce byte-identical output, and
//! one [`SymbolEnvironment`] can serve many renders concurrently.

pub mod ast;
pub mod error;
pub mod latex;
pub mod model;
pub mod report;

pub use ast::{BinaryKind, Constant, Expr, NaryKind, RelationKind, UnaryKind};
pub use error::{Error, Result};
pub use latex::{format_number, mask_special_chars, render_identifier, render_math};
pub use model::{CompartmentInfo, RenderConfig, SpeciesInfo, Symbol, SymbolEnvironment};
pub use report::ReportWriter;
