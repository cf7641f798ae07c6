use check_postgres_query::backend::postgres::PostgresBackend;
use check_postgres_query::backend::{Backend, QueryResult};
use check_postgres_query::check;
use check_postgres_query::cli::Cli;
use check_postgres_query::config::{self, CheckConfig};
use check_postgres_query::error::CheckError;
use check_postgres_query::output;
use check_postgres_query::status::{CheckOutcome, Status};
use check_postgres_query::verbose::{self, Timer};
use clap::Parser;
use clap::error::ErrorKind;

#[tokio::main]
async fn main() {
    // Load .env file (optional, ignore if missing)
    let _ = dotenvy::dotenv();

    // Help and version keep clap's normal exit path; any other usage error
    // must still land inside the supervisor's exit-code contract.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            output::print_and_exit(CheckOutcome::new(Status::Unknown, "invalid arguments"));
        }
    };

    let outcome = match run(&cli).await {
        Ok(outcome) => outcome,
        Err(err) => check::outcome_for_error(&err),
    };
    output::print_and_exit(outcome);
}

async fn run(cli: &Cli) -> Result<CheckOutcome, CheckError> {
    let config = config::load(cli)?;
    let result = execute_query(&config).await?;
    Ok(check::assess(
        &result,
        config.mode,
        config.critical.as_ref(),
        config.warning.as_ref(),
    ))
}

async fn execute_query(config: &CheckConfig) -> Result<QueryResult, CheckError> {
    let verbose = config.verbose;

    verbose::emit(
        verbose,
        &format!(
            "connecting to {}...",
            config.connection.describe(config.show_secrets)
        ),
    );
    let timer = Timer::start();
    let backend = PostgresBackend::new(&config.connection);
    verbose::emit(verbose, "executing query...");
    let result = backend.execute(&config.query, config.timeout_secs).await?;
    verbose::emit(
        verbose,
        &format!(
            "query complete ({}ms, {} rows)",
            timer.elapsed_ms(),
            result.rows.len()
        ),
    );

    Ok(result)
}
