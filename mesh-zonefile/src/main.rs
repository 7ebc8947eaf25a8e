use std::process::ExitCode;

fn main() -> ExitCode {
    // stdout carries the zonefile, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mesh_zonefile=warn"))
        )
        .init();

    match mesh_zonefile::run(std::env::args_os().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Aborting");
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
