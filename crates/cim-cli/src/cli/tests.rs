//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_scrape_defaults() {
    match parse(&["cim", "scrape"]) {
        CliCommand::Scrape {
            output,
            listing_url,
            base_url,
            marker_class,
        } => {
            assert!(output.is_none());
            assert!(listing_url.is_none());
            assert!(base_url.is_none());
            assert!(marker_class.is_none());
        }
        _ => panic!("expected Scrape"),
    }
}

#[test]
fn cli_parse_scrape_overrides() {
    match parse(&[
        "cim",
        "scrape",
        "--output",
        "/tmp/mirror",
        "--listing-url",
        "http://127.0.0.1:8080/coins",
        "--base-url",
        "http://127.0.0.1:8080",
        "--marker-class",
        "NavLink",
    ]) {
        CliCommand::Scrape {
            output,
            listing_url,
            base_url,
            marker_class,
        } => {
            assert_eq!(output, Some(PathBuf::from("/tmp/mirror")));
            assert_eq!(listing_url.as_deref(), Some("http://127.0.0.1:8080/coins"));
            assert_eq!(base_url.as_deref(), Some("http://127.0.0.1:8080"));
            assert_eq!(marker_class.as_deref(), Some("NavLink"));
        }
        _ => panic!("expected Scrape with overrides"),
    }
}

#[test]
fn cli_parse_dataset() {
    match parse(&["cim", "dataset", "balabaskar/count-coins-image-dataset"]) {
        CliCommand::Dataset { slug, output } => {
            assert_eq!(slug, "balabaskar/count-coins-image-dataset");
            assert_eq!(output, PathBuf::from("datasets/coins"));
        }
        _ => panic!("expected Dataset"),
    }
}

#[test]
fn cli_parse_dataset_output() {
    match parse(&["cim", "dataset", "owner/set", "--output", "/data/coins"]) {
        CliCommand::Dataset { slug, output } => {
            assert_eq!(slug, "owner/set");
            assert_eq!(output, PathBuf::from("/data/coins"));
        }
        _ => panic!("expected Dataset with --output"),
    }
}

#[test]
fn cli_parse_config() {
    assert!(matches!(parse(&["cim", "config"]), CliCommand::Config));
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["cim", "upload"]).is_err());
}
