use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};

use clap::{App, Arg, ErrorKind};
use kv_transpose::TransposeError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const USAGE_EXIT: i32 = 255;

/**
 * Reads a comma separated key/value log and prints it transposed, one column per key.
 */
fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let input_args = App::new("kv-transpose")
        .version(&kv_transpose::version()[..])
        .author("Joshua Vander Hook <josh@vanderhook.info>")
        .about(&kv_transpose::about()[..])
        .after_help(&kv_transpose::usage_example()[..])
        .arg(
            Arg::with_name("infile")
                .required(true)
                .help("The CSV file to transpose, e.g. 'transpose data.csv'"),
        )
        .get_matches_safe();

    let input_args = match input_args {
        Ok(m) => m,
        Err(e) => match e.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => e.exit(),
            _ => {
                let err = TransposeError::Usage(e.message);
                eprintln!("{}\n", err);
                eprintln!("Use:   kv-transpose <infile.csv>\n");
                eprint!("{}", kv_transpose::usage_example());
                std::process::exit(USAGE_EXIT);
            }
        },
    };

    // clap guarantees the required positional is there
    let path = input_args.value_of("infile").unwrap_or_default();
    let reader: Box<dyn BufRead> = match File::open(path) {
        Ok(f) => Box::new(BufReader::new(f)),
        Err(e) => {
            // unreadable input is just empty input: only the trailing heading line is printed
            warn!(path = %path, error = %e, "cannot open input, treating as empty");
            Box::new(io::empty())
        }
    };

    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    match kv_transpose::transpose(reader, out) {
        Ok(summary) => {
            info!(
                lines = summary.lines,
                blocks = summary.blocks,
                columns = summary.headings.len(),
                rows = summary.col_cnt.saturating_sub(1),
                "done"
            );
        }
        Err(e) if e.is_broken_pipe() => (),
        Err(e) => {
            eprintln!("kv-transpose: {}", e);
            std::process::exit(1);
        }
    }
}
