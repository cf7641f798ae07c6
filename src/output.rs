use crate::status::CheckOutcome;

/// Print the one-line outcome to stdout in the supervisor contract format:
/// `check-postgres-query <STATUS>: <message>`.
pub fn print_outcome(outcome: &CheckOutcome) {
    println!("check-postgres-query {}: {}", outcome.status, outcome.message);
}

/// Report the outcome and exit with its status code.
pub fn print_and_exit(outcome: CheckOutcome) -> ! {
    print_outcome(&outcome);
    std::process::exit(outcome.status.exit_code())
}
