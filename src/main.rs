use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    match ral_match::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
