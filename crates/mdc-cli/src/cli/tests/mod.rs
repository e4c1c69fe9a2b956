//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn download_defaults() {
    let cmd = parse(&["mdc", "download"]);
    match cmd {
        CliCommand::Download { overwrite, jobs } => {
            assert!(!overwrite);
            assert_eq!(jobs, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn download_with_overwrite_and_jobs() {
    let cmd = parse(&["mdc", "download", "--overwrite", "--jobs", "5"]);
    match cmd {
        CliCommand::Download { overwrite, jobs } => {
            assert!(overwrite);
            assert_eq!(jobs, Some(5));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn convert_quiet_flag() {
    let cmd = parse(&["mdc", "convert", "--quiet"]);
    match cmd {
        CliCommand::Convert {
            overwrite, quiet, ..
        } => {
            assert!(!overwrite);
            assert!(quiet);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn together_accepts_all_flags() {
    let cmd = parse(&["mdc", "together", "--overwrite", "--quiet", "--jobs", "2"]);
    match cmd {
        CliCommand::Together {
            overwrite,
            quiet,
            jobs,
        } => {
            assert!(overwrite);
            assert!(quiet);
            assert_eq!(jobs, Some(2));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn one_requires_url() {
    assert!(Cli::try_parse_from(["mdc", "one"]).is_err());

    let cmd = parse(&["mdc", "one", "--url", "x.com/a.mp4"]);
    match cmd {
        CliCommand::One { url, .. } => assert_eq!(url, "x.com/a.mp4"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn config_subcommand_parses() {
    assert!(matches!(parse(&["mdc", "config"]), CliCommand::Config));
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["mdc", "upload"]).is_err());
}
