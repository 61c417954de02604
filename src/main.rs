use clap::Parser;
use errctx::ContextError;

/// Preview how an error chain renders: give a root message and the context
/// strings layered on top of it, oldest first.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Root error message
    root: String,
    /// Context strings, oldest first (closest to the root)
    context: Vec<String>,
    /// Also print the recovered root message
    #[arg(long)]
    show_root: bool,
    /// Log each appended layer
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let mut err = ContextError::new(args.root);
    for ctx in args.context {
        tracing::debug!(context = %ctx, "appending layer");
        err.add_context(ctx);
    }

    println!("{err}");
    if args.show_root {
        println!("root: {}", errctx::root(&err));
    }
}
