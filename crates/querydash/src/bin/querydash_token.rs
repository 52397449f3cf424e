//! querydash-token - Generate random API tokens.

fn main() -> std::process::ExitCode {
    querydash::cmd::token::main()
}
