//! PHP 7 lexer, parser, and AST.
//!
//! `lexer::Lexer` turns source bytes into a `Token` stream; `parser::parse`
//! (or `parser::Parser` directly, for callers that want to drive bumping
//! themselves) turns that stream into a `Program` allocated out of a
//! `bumpalo::Bump` arena. Diagnostics flow out through `diagnostics::DiagnosticSink`
//! rather than a fixed error type, so a host can collect them, stream them,
//! or ignore them with `diagnostics::NullSink`.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod line_index;
pub mod literal;
pub mod parser;
pub mod property_bag;
pub mod source;
pub mod span;

pub use span::Span;
