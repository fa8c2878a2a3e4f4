//! monadic-playground
//!
//! Prints each walkthrough section to stdout. Diagnostics go to stderr and
//! are filtered with `RUST_LOG`.
//!
//! ```bash
//! cargo run --bin monadic-playground
//! RUST_LOG=monadic_playground=debug cargo run --bin monadic-playground
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use monadic_playground::demos;

fn print_section(title: &str, lines: &[String]) {
    println!("--{title}--");
    for line in lines {
        println!("{line}");
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "monadic_playground=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    print_section("Functors", &demos::functors());
    println!();
    print_section("Applicatives", &demos::applicatives());
    println!();
    print_section("Monads", &demos::monads());
    println!();

    print_section("Reader Monad", &demos::reader_halving());
    // The database prints each rename as it is written.
    let renamed = demos::reader_renames();
    tracing::debug!(renamed = renamed.len(), "reader section finished");
    println!();

    print_section("Try Monad", &demos::try_monad());
}
