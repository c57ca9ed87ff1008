//! Trav Check CLI
//!
//! Runs every conformance behavior against every container in `trav_seq`.

mod options;

use std::process::ExitCode;
use std::sync::Once;

use trav_conformance::{ConformanceRunner, ConformanceSummary, HarnessConfig};
use trav_seq::{ListFactory, StreamFactory, TreeFactory, VectorFactory};

use options::{Options, USAGE};

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical subscriber, only if `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .init();
        }
    });
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match Options::parse(&args, HarnessConfig::from_env()) {
        Ok(options) => options,
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    if options.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    tracing::debug!(config = ?options.config, verbose = options.verbose, "starting run");
    let runner = ConformanceRunner::with_config(options.config);
    let mut summary = ConformanceSummary::new();
    summary.add(runner.run::<ListFactory>());
    summary.add(runner.run::<VectorFactory>());
    summary.add(runner.run::<TreeFactory>());
    summary.add(runner.run::<StreamFactory>());

    println!("{}", summary.render(options.verbose));
    if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
