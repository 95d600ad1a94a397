//! Diagnostic sink used by the lexer and parser to report problems without
//! owning a concrete error type. Mirrors the host-supplied sinks used
//! elsewhere in the interpreter (e.g. the VM's error channel) but scoped to
//! lex/parse-time events.

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Severity of a reported diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Warning,
    Error,
}

/// Stable code identifying the kind of problem. Hosts can match on this
/// without parsing the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticCode {
    SyntaxError,
    UnexpectedToken,
    TooBigIntegerConversion,
    InvalidCodePoint,
    InvalidCodePointName,
    LexicalError,
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiagnosticCode::SyntaxError => "SyntaxError",
            DiagnosticCode::UnexpectedToken => "UnexpectedToken",
            DiagnosticCode::TooBigIntegerConversion => "TooBigIntegerConversion",
            DiagnosticCode::InvalidCodePoint => "InvalidCodePoint",
            DiagnosticCode::InvalidCodePointName => "InvalidCodePointName",
            DiagnosticCode::LexicalError => "LexicalError",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub span: Span,
    pub code: DiagnosticCode,
    pub message: String,
}

/// External collaborator that receives lex/parse diagnostics as they are
/// produced, in source order. A host that only wants the final `Program`
/// can pass `NullSink`; one that wants live diagnostics (an IDE, a linter)
/// can implement this directly.
pub trait DiagnosticSink {
    fn error(&mut self, span: Span, code: DiagnosticCode, message: &str);
    fn warning(&mut self, span: Span, code: DiagnosticCode, message: &str);
}

/// Discards every diagnostic. Used when a caller only cares about the AST
/// and recovers errors from `Program::errors` instead.
#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn error(&mut self, _span: Span, _code: DiagnosticCode, _message: &str) {}
    fn warning(&mut self, _span: Span, _code: DiagnosticCode, _message: &str) {}
}

/// Collects every diagnostic into a `Vec`, preserving emission order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

impl DiagnosticSink for CollectingSink {
    fn error(&mut self, span: Span, code: DiagnosticCode, message: &str) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Error,
            span,
            code,
            message: message.to_string(),
        });
    }

    fn warning(&mut self, span: Span, code: DiagnosticCode, message: &str) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            span,
            code,
            message: message.to_string(),
        });
    }
}
