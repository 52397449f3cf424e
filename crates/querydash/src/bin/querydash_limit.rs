//! querydash-limit - Apply the automatic row limit to a query.

fn main() -> std::process::ExitCode {
    querydash::cmd::limit::main()
}
