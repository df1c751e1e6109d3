use std::process::ExitCode;

use symnmf_analysis::cli::{self, GENERIC_ERROR, SymnmfCli};

fn main() -> ExitCode {
    cli::init_tracing();

    match cli::parse_args::<SymnmfCli>().and_then(|args| cli::run_goal(&args)) {
        Ok(matrix) => {
            println!("{}", cli::format_matrix(&matrix));
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "symnmf failed");
            println!("{GENERIC_ERROR}");
            ExitCode::FAILURE
        }
    }
}
