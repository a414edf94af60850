use std::{env, io::Write, process::ExitCode};

use kaleidoscope::{errors::errors::ErrorTip, run};
use tracing_subscriber::{fmt, EnvFilter};

fn configure_tracing() {
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    // Only fails if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> ExitCode {
    configure_tracing();

    match run(env::args()) {
        Ok(output) => {
            for diagnostic in &output.diagnostics {
                eprint!("{}", diagnostic);
            }
            let mut stdout = std::io::stdout().lock();
            if stdout.write_all(output.rendered.as_bytes()).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            match error.get_tip() {
                ErrorTip::None => eprintln!("{}", error),
                tip => eprintln!("{}\n{}", error, tip),
            }
            ExitCode::from(1)
        }
    }
}
