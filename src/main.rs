mod cli;
mod error;
mod runtime;
mod syntax;

use std::process;

use clap::Parser;

use cli::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("terms: {:?}", cli.terms);

    if cli.postfix {
        if let Ok(tokens) = syntax::to_postfix(cli.terms.iter().map(String::as_str)) {
            println!("{}", runtime::render(&tokens));
        }
    }

    match runtime::run(&cli.terms) {
        Ok(value) => println!("{value}"),
        Err(why) if cli.strict => {
            eprintln!("{why}");
            process::exit(1);
        }
        Err(why) => {
            println!("{why}");
            println!("{}", f64::NAN);
        }
    }
}
