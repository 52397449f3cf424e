//! querydash-hash - Print the cache hash of a query.

fn main() -> std::process::ExitCode {
    querydash::cmd::hash::main()
}
