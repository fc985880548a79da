use std::io::{self, IsTerminal};

use clap::Parser;
use quickcalc::{
    calculator::session::SessionConfig,
    interrupt::{InterruptFlag, Interruptible},
    prompt::{Prompt, StreamPrompt},
    run_session,
};
use rustyline::DefaultEditor;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// quickcalc is an interactive calculator: enter a number, an operator and a
/// second number to see the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Skips the welcome banner.
    #[arg(short, long)]
    quiet: bool,

    /// Writes debug diagnostics to standard error.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    const fn session_config(&self) -> SessionConfig {
        SessionConfig { show_banner: !self.quiet }
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,quickcalc=debug")
    } else {
        EnvFilter::new("warn")
    };

    fmt::fmt().with_env_filter(filter)
              .with_writer(io::stderr)
              .with_target(false)
              .with_thread_ids(false)
              .with_file(false)
              .with_line_number(false)
              .init();
}

fn listen_for_interrupts<F>(interrupts: &InterruptFlag, wake: F)
    where F: Fn() + Send + 'static
{
    if let Err(e) = interrupts.listen(wake) {
        warn!(error = %e, "failed to install interrupt handler");
    }
}

fn run<P: Prompt>(prompt: P, args: &Args) {
    match run_session(prompt, io::stdout(), args.session_config()) {
        Ok(end) => info!(?end, "exiting"),
        Err(e) => {
            error!(error = %e, "failed to write output");
            eprintln!("Failed to write output: {e}");
        },
    }
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let interrupts = InterruptFlag::new();

    // A terminal delivers Ctrl-C to rustyline as a key; pipes only see SIGINT.
    if io::stdin().is_terminal() {
        let editor = DefaultEditor::new().unwrap_or_else(|e| {
                                             error!(error = %e, "failed to initialize terminal");
                                             eprintln!("Failed to initialize the terminal: {e}");
                                             std::process::exit(1);
                                         });
        listen_for_interrupts(&interrupts, || {});
        run(Interruptible::new(editor, interrupts), &args);
    } else {
        let prompt = StreamPrompt::stdin();
        listen_for_interrupts(&interrupts, prompt.waker());
        run(Interruptible::new(prompt, interrupts), &args);
    }
}
