use bumpalo::Bump;
use clap::Parser as ClapParser;
use php_parser::ast::sexpr::SExprFormatter;
use php_parser::ast::visitor::Visitor;
use php_parser::diagnostics::{CollectingSink, Severity};
use php_parser::parser::{self, ParserFeatures};
use std::fs;
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "php-parse")]
#[command(about = "Parses a PHP source file and prints its AST", long_about = None)]
struct Cli {
    /// PHP source file to parse
    file: PathBuf,

    /// Print the AST as an s-expression instead of JSON
    #[arg(long)]
    sexpr: bool,

    /// Treat a bare `<?` as an open tag, not just `<?php`/`<?=`
    #[arg(long)]
    short_open_tags: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let source = fs::read(&cli.file)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {}", cli.file.display(), e))?;

    let arena = Bump::new();
    let features = ParserFeatures {
        short_open_tags: cli.short_open_tags,
    };
    let mut sink = CollectingSink::new();
    let program = parser::parse(&source, &arena, features, &mut sink);

    for diagnostic in &sink.diagnostics {
        let label = match diagnostic.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        eprintln!(
            "{}: {} ({}) at offset {}",
            label, diagnostic.message, diagnostic.code, diagnostic.span.start
        );
    }

    if cli.sexpr {
        let mut formatter = SExprFormatter::new(&source);
        formatter.visit_program(&program);
        println!("{}", formatter.finish());
    } else {
        println!("{}", serde_json::to_string_pretty(&program)?);
    }

    if sink.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}
