use std::io::{self, Write};
use std::process;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use calc::application::build_command_tree;
use calc::cli::{output, Dispatcher};
use calc::config::Settings;
use calc::exitcode;

fn main() {
    setup_logging();

    let tree = match build_command_tree() {
        Ok(tree) => tree,
        Err(e) => {
            output::error(&mut io::stderr(), &e).ok();
            process::exit(exitcode::FAILURE);
        }
    };
    let dispatcher = Dispatcher::new(tree).with_config(Box::new(Settings::load_or_default()));

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    let code = {
        let mut stdout = io::stdout().lock();
        let mut stderr = io::stderr().lock();
        let code = dispatcher.execute(&args, &mut stdout, &mut stderr);
        match stdout.flush().and(stderr.flush()) {
            Ok(()) => code,
            Err(_) => exitcode::FAILURE,
        }
    };
    process::exit(code);
}

/// Log to stderr, filtered by `RUST_LOG` (default: warn).
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!("logging initialised");
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc::cli::help;
    use calc::util::testing;

    #[test]
    fn verify_cli() {
        testing::init_test_setup();
        let tree = build_command_tree().unwrap();
        help::to_clap(&tree, tree.root()).debug_assert();
    }
}
