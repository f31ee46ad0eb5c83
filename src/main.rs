use log::debug;
use std::env;
use std::io::{self, Write};
use std::process;

mod config;
mod error;
mod report;

use cmd_args::parse_args;
use config::{init_logging, load_output_format, OutputFormat};
use error::CliResult;

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(err.exit_code());
    }
}

fn run() -> CliResult<()> {
    let format = load_output_format()?;
    // Our own binary path fills the executable slot, argv[1] the script slot.
    // Non-UTF-8 arguments are decoded lossily rather than rejected.
    let parsed = parse_args(env::args_os().map(|arg| arg.to_string_lossy().into_owned()));
    debug!("cli event=report format={:?}", format);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => out.write_all(report::render_text(&parsed).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report::to_json(&parsed))?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(())
}
