use std::process::ExitCode;
use clap::Parser as ClapParser;
use lox_expr::Config;

fn main() -> ExitCode {
    let config: Config = Config::parse();

    match lox_expr::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            eprintln!("{}", failure);
            ExitCode::from(failure.exit_code())
        },
    }
}
