mod app;

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let program_name = std::env::args_os()
        .next()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    match app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            app::report_error(&program_name, &err);
            ExitCode::FAILURE
        }
    }
}
