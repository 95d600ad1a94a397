use crate::ast::{Expr, ExprId, Name, ParseError, Program};
use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use crate::lexer::{
    Lexer, LexerMode,
    token::{Token, TokenKind},
};
use crate::literal::{self, IntegerLiteral, LiteralFormat, StringQuote};
use bumpalo::Bump;

use crate::span::Span;

mod attributes;
mod control_flow;
mod definitions;
mod expr;
mod stmt;
mod types;

/// Parse-time feature switches. `short_open_tags` controls whether a bare
/// `<?` opens a scripting section (off by default, matching PHP's
/// `short_open_tag = Off` default since PHP 7).
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserFeatures {
    pub short_open_tags: bool,
}

#[allow(dead_code)]
pub trait TokenSource<'src> {
    fn current(&self) -> &Token;
    fn lookahead(&self, n: usize) -> &Token;
    fn bump(&mut self);
    fn set_mode(&mut self, mode: LexerMode);
}

pub struct Parser<'src, 'ast> {
    pub(super) lexer: Lexer<'src>, // In real impl, this would be wrapped in a TokenSource
    pub(super) arena: &'ast Bump,
    pub(super) current_token: Token,
    pub(super) next_token: Token,
    pub(super) errors: std::vec::Vec<ParseError>,
    pub(super) warnings: std::vec::Vec<Diagnostic>,
    pub(super) features: ParserFeatures,
    pub(super) current_doc_comment: Option<Span>,
    pub(super) next_doc_comment: Option<Span>,
    pub(super) seen_non_declare_stmt: bool,
}

impl<'src, 'ast> Parser<'src, 'ast> {
    pub fn new(lexer: Lexer<'src>, arena: &'ast Bump) -> Self {
        Self::with_features(lexer, arena, ParserFeatures::default())
    }

    pub fn with_features(lexer: Lexer<'src>, arena: &'ast Bump, features: ParserFeatures) -> Self {
        let mut parser = Self {
            lexer,
            arena,
            current_token: Token {
                kind: TokenKind::Eof,
                span: Span::default(),
            },
            next_token: Token {
                kind: TokenKind::Eof,
                span: Span::default(),
            },
            errors: std::vec::Vec::new(),
            warnings: std::vec::Vec::new(),
            features,
            current_doc_comment: None,
            next_doc_comment: None,
            seen_non_declare_stmt: false,
        };
        parser.bump();
        parser.bump();
        parser
    }

    /// Drains any warnings collected while parsing (currently just integer
    /// literal overflow promotions) into the given sink, in emission order.
    pub fn drain_warnings_into(&mut self, sink: &mut dyn DiagnosticSink) {
        for diagnostic in self.warnings.drain(..) {
            match diagnostic.severity {
                Severity::Warning => sink.warning(diagnostic.span, diagnostic.code, &diagnostic.message),
                Severity::Error => sink.error(diagnostic.span, diagnostic.code, &diagnostic.message),
            }
        }
    }

    pub(super) fn make_integer(&mut self, text: &[u8], span: Span) -> ExprId<'ast> {
        let (format, value) = literal::decode_integer(text);
        match value {
            IntegerLiteral::Int(decoded) => self.arena.alloc(Expr::Integer {
                value: self.arena.alloc_slice_copy(text),
                format,
                decoded,
                span,
            }),
            IntegerLiteral::Overflowed(decoded) => {
                self.warnings.push(Diagnostic {
                    severity: Severity::Warning,
                    span,
                    code: DiagnosticCode::TooBigIntegerConversion,
                    message: "integer literal too large, promoted to float".to_string(),
                });
                self.arena.alloc(Expr::Float {
                    value: self.arena.alloc_slice_copy(text),
                    format,
                    decoded,
                    span,
                })
            }
        }
    }

    pub(super) fn make_float(&mut self, text: &[u8], span: Span) -> ExprId<'ast> {
        let (format, decoded) = literal::decode_float(text);
        self.arena.alloc(Expr::Float {
            value: self.arena.alloc_slice_copy(text),
            format,
            decoded,
            span,
        })
    }

    /// `text` is the raw token slice including the surrounding quote
    /// characters (single or double); the quote style is taken from the
    /// first byte, matching how the lexer emits a single `StringLiteral`
    /// token for both quoting styles when there is nothing to interpolate.
    pub(super) fn make_string(&mut self, text: &[u8], span: Span) -> ExprId<'ast> {
        let quote = match text.first() {
            Some(b'\'') => StringQuote::Single,
            _ => StringQuote::Double,
        };
        let body = if text.len() >= 2 { &text[1..text.len() - 1] } else { text };
        let decoded = literal::decode_string(body, quote);
        self.arena.alloc(Expr::String {
            value: self.arena.alloc_slice_copy(text),
            format: LiteralFormat::from(quote),
            decoded: self.arena.alloc_slice_copy(&decoded),
            span,
        })
    }

    /// Builds a string literal node for an `EncapsedAndWhitespace` chunk of
    /// an interpolated (double-quoted, heredoc, or backtick) string. These
    /// carry no surrounding quote characters but still use double-quote
    /// escape rules.
    pub(super) fn make_interpolated_piece(&mut self, text: &[u8], span: Span) -> ExprId<'ast> {
        let decoded = literal::decode_string(text, StringQuote::Double);
        self.arena.alloc(Expr::String {
            value: self.arena.alloc_slice_copy(text),
            format: LiteralFormat::Double,
            decoded: self.arena.alloc_slice_copy(&decoded),
            span,
        })
    }

    /// Builds a string literal node for an implicit array-offset key used
    /// inside interpolation (`"$arr[key]"`). These are taken verbatim, with
    /// no escape processing.
    pub(super) fn make_raw_string(&mut self, text: &[u8], span: Span) -> ExprId<'ast> {
        self.arena.alloc(Expr::String {
            value: self.arena.alloc_slice_copy(text),
            format: LiteralFormat::Double,
            decoded: self.arena.alloc_slice_copy(text),
            span,
        })
    }

    fn bump(&mut self) {
        self.current_token = self.next_token;
        self.current_doc_comment = self.next_doc_comment;
        self.next_doc_comment = None;
        loop {
            let token = self.lexer.next().unwrap_or(Token {
                kind: TokenKind::Eof,
                span: Span::default(),
            });
            if token.kind == TokenKind::DocComment {
                self.next_doc_comment = Some(token.span);
            } else if token.kind != TokenKind::Comment {
                self.next_token = token;
                break;
            }
        }
    }

    fn expect_semicolon(&mut self) {
        if self.current_token.kind == TokenKind::SemiColon {
            self.bump();
        } else if self.current_token.kind == TokenKind::CloseTag {
            // Implicit semicolon at close tag
        } else if self.current_token.kind == TokenKind::Eof {
            // Implicit semicolon at EOF
        } else {
            // Error: Missing semicolon
            self.errors.push(ParseError {
                span: self.current_token.span,
                message: "Missing semicolon",
            });
            // Recovery: Assume it was there and continue.
            // We do NOT bump the current token because it belongs to the next statement.
            self.sync_to_statement_end();
        }
    }

    pub(super) fn parse_name(&mut self) -> Name<'ast> {
        let start = self.current_token.span.start;
        let mut parts = std::vec::Vec::new();

        if self.current_token.kind == TokenKind::NsSeparator {
            parts.push(self.current_token);
            self.bump();
        } else if self.current_token.kind == TokenKind::Namespace {
            parts.push(self.current_token);
            self.bump();
            if self.current_token.kind == TokenKind::NsSeparator {
                parts.push(self.current_token);
                self.bump();
            }
        }

        loop {
            if self.current_token.kind == TokenKind::Identifier
                || self.current_token.kind.is_semi_reserved()
            {
                parts.push(self.current_token);
                self.bump();
            } else {
                break;
            }

            if self.current_token.kind == TokenKind::NsSeparator {
                parts.push(self.current_token);
                self.bump();
            } else {
                break;
            }
        }

        let end = if parts.is_empty() {
            start
        } else {
            parts.last().unwrap().span.end
        };

        Name {
            parts: self.arena.alloc_slice_copy(&parts),
            span: Span::new(start, end),
        }
    }

    pub fn parse_program(&mut self) -> Program<'ast> {
        let mut statements = std::vec::Vec::new(); // Temporary vec, will be moved to arena

        while self.current_token.kind != TokenKind::Eof {
            statements.push(self.parse_top_stmt());
        }

        let span = if let (Some(first), Some(last)) = (statements.first(), statements.last()) {
            Span::new(first.span().start, last.span().end)
        } else {
            Span::default()
        };

        Program {
            statements: self.arena.alloc_slice_copy(&statements),
            errors: self.arena.alloc_slice_copy(&self.errors),
            span,
        }
    }

    fn sync_to_statement_end(&mut self) {
        while !matches!(
            self.current_token.kind,
            TokenKind::SemiColon | TokenKind::CloseBrace | TokenKind::CloseTag | TokenKind::Eof
        ) {
            self.bump();
        }
        if self.current_token.kind == TokenKind::SemiColon {
            self.bump();
        }
    }
}

/// Entry point: lexes and parses a complete source unit, reporting warnings
/// collected during parsing (currently integer literal overflow promotion)
/// through `diagnostics`. Syntax errors are both pushed into the returned
/// `Program::errors` (so a caller can render them without a sink) and
/// mirrored into `diagnostics` as `DiagnosticCode::SyntaxError`.
pub fn parse<'ast>(
    source: &[u8],
    arena: &'ast Bump,
    features: ParserFeatures,
    diagnostics: &mut dyn DiagnosticSink,
) -> Program<'ast> {
    let lexer = Lexer::with_features(source, features.short_open_tags);
    let mut parser = Parser::with_features(lexer, arena, features);
    let program = parser.parse_program();
    for error in program.errors {
        diagnostics.error(error.span, DiagnosticCode::SyntaxError, error.message);
    }
    parser.drain_warnings_into(diagnostics);
    program
}
