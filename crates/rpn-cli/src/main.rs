//! rpncalc - reverse Polish notation calculator
use rpn_cli::session::batch_lines;
use rpn_cli::{
    logging, parse_args, repl, CliError, CliResult, Mode, ParsedArgs, ReplConfig, Session,
};
use std::fs;
use std::io::{self, Read};
use std::process;

fn read_input(path: &str) -> CliResult<String> {
    let read_err = |source| CliError::ReadInput {
        path: path.to_string(),
        source,
    };
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map_err(read_err)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).map_err(read_err)
    }
}

/// Run the selected mode. `Ok(false)` means some evaluation failed.
fn run(mode: Mode, json: bool, session: &mut Session) -> CliResult<bool> {
    let mut stdout = io::stdout();
    match mode {
        Mode::Repl => {
            repl::run(session)?;
            Ok(true)
        }
        Mode::Eval(expressions) => {
            let mut all_ok = true;
            for expr in &expressions {
                all_ok &= session.evaluate(expr, &mut stdout)?;
            }
            Ok(all_ok)
        }
        Mode::Batch(path) => {
            let input = read_input(&path)?;
            let report = session.run_batch(&batch_lines(&input));
            Session::write_report(&report, json, &mut stdout)?;
            Ok(report.all_succeeded())
        }
    }
}

fn main() {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(ParsedArgs::Run(options)) => options,
        Ok(ParsedArgs::Help) => {
            print!("{}", rpn_cli::help::usage());
            return;
        }
        Ok(ParsedArgs::Version) => {
            println!("rpncalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!();
            eprint!("{}", rpn_cli::help::usage());
            process::exit(2);
        }
    };

    let config = ReplConfig::from_env().apply(&options);
    logging::init(&config.log_filter);

    let mut session = Session::new(config);
    match run(options.mode, options.json, &mut session) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
