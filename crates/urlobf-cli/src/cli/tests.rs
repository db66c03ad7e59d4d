use super::*;
use std::net::Ipv4Addr;
use urlobf_core::resolver::StaticResolver;

fn parse(args: &[&str]) -> Result<Action, CliError> {
    parse_args(args.iter().copied())
}

fn example_resolver() -> StaticResolver {
    StaticResolver::new().with_entry("example.com", Ipv4Addr::new(93, 184, 216, 34))
}

#[test]
fn cli_parse_url() {
    assert_eq!(
        parse(&["urlobf", "http://example.com/x=1"]).unwrap(),
        Action::Obfuscate {
            url: "http://example.com/x=1".to_string()
        }
    );
}

#[test]
fn cli_parse_trims_url() {
    assert_eq!(
        parse(&["urlobf", "  example.com \n"]).unwrap(),
        Action::Obfuscate {
            url: "example.com".to_string()
        }
    );
}

#[test]
fn cli_parse_help_wins_over_url() {
    assert_eq!(parse(&["urlobf", "-h"]).unwrap(), Action::Usage);
    assert_eq!(
        parse(&["urlobf", "http://example.com", "-h"]).unwrap(),
        Action::Usage
    );
    assert_eq!(parse(&["urlobf", "-h", "-h"]).unwrap(), Action::Usage);
}

#[test]
fn cli_parse_no_arguments() {
    let err = parse(&["urlobf"]).unwrap_err();
    assert!(matches!(err, CliError::NoOptions));
    assert_eq!(err.to_string(), "no options given");
    assert_eq!(err.exit_code(), 2);
    assert!(err.shows_usage());
}

#[test]
fn cli_parse_blank_url() {
    let err = parse(&["urlobf", "   "]).unwrap_err();
    assert!(matches!(err, CliError::NoUrl));
    assert_eq!(err.to_string(), "no url provided");
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn cli_parse_separator_without_url() {
    assert!(matches!(parse(&["urlobf", "--"]), Err(CliError::NoUrl)));
}

#[test]
fn cli_parse_unknown_flag() {
    let err = parse(&["urlobf", "-x", "example.com"]).unwrap_err();
    assert_eq!(err.to_string(), "option -x not recognized");
    assert_eq!(err.exit_code(), 2);
    assert!(!err.shows_usage());
}

#[test]
fn cli_parse_builtin_flags_are_disabled() {
    assert!(matches!(
        parse(&["urlobf", "--help"]),
        Err(CliError::BadArgument(_))
    ));
    assert!(matches!(
        parse(&["urlobf", "-V"]),
        Err(CliError::BadArgument(_))
    ));
}

#[test]
fn cli_parse_second_url_rejected() {
    let err = parse(&["urlobf", "a.example", "b.example"]).unwrap_err();
    assert!(matches!(err, CliError::BadArgument(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn usage_line() {
    assert_eq!(usage("urlobf"), "usage: urlobf [<url> | -h]");
}

#[test]
fn obfuscate_writes_five_lines() {
    let mut out = Vec::new();
    obfuscate_to(
        "http://example.com/x=1",
        &example_resolver(),
        &mut out,
    )
    .unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "http://93.184.216.34/x=1");
    assert_eq!(lines[2], "http://0135.0270.0330.042/x=1");
}

#[test]
fn obfuscate_writes_three_lines_without_path() {
    let mut out = Vec::new();
    obfuscate_to(
        "example.com",
        &example_resolver(),
        &mut out,
    )
    .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "https://93.184.216.34\nhttps://0x5db8d822\nhttps://0135.0270.0330.042\n"
    );
}

#[test]
fn resolution_failure_maps_to_exit_one() {
    let mut out = Vec::new();
    let err = obfuscate_to(
        "http://unknown.example/",
        &example_resolver(),
        &mut out,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "name resolution failed");
    assert_eq!(err.exit_code(), 1);
    assert!(out.is_empty());
}

#[test]
fn run_prints_usage_for_help() {
    let mut out = Vec::new();
    let args = ["urlobf", "-h"].map(OsString::from).to_vec();
    run(args, &example_resolver(), "urlobf", &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "usage: urlobf [<url> | -h]\n");
}

#[test]
fn run_obfuscates_with_fixed_default_scheme() {
    let mut out = Vec::new();
    let args = ["urlobf", "example.com/abc"].map(OsString::from).to_vec();
    run(args, &example_resolver(), "urlobf", &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[3], "https://0x5db8d822/%61%62%63");
    assert_eq!(lines[4], "https://0135.0270.0330.042/%61%62%63");
}
