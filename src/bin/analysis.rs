use std::process::ExitCode;

use symnmf_analysis::cli::{self, AnalysisCli, GENERIC_ERROR};

fn main() -> ExitCode {
    cli::init_tracing();

    match cli::parse_args::<AnalysisCli>().and_then(|args| cli::run_analysis(&args)) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "analysis failed");
            println!("{GENERIC_ERROR}");
            ExitCode::FAILURE
        }
    }
}
