//! CLI parse tests.

use super::Cli;
use clap::Parser;

#[test]
fn cli_parse_no_args() {
    assert!(Cli::try_parse_from(["imgfetch"]).is_ok());
}

#[test]
fn cli_parse_rejects_stray_args() {
    assert!(Cli::try_parse_from(["imgfetch", "https://example.com/x.png"]).is_err());
}

#[test]
fn cli_parse_rejects_unknown_flags() {
    assert!(Cli::try_parse_from(["imgfetch", "--jobs", "4"]).is_err());
}
