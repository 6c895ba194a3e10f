#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    /// Print the postfix form before the result
    #[arg(short, long)]
    pub postfix: bool,

    /// Report errors on stderr and exit with a non-zero status
    #[arg(short, long)]
    pub strict: bool,

    /// Expression terms, e.g. `1 + 2 * 3`
    #[arg(allow_hyphen_values = true, allow_negative_numbers = true, trailing_var_arg = true)]
    pub terms: Vec<String>,
}
