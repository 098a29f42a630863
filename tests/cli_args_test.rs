//! Tests for command line parsing and error exit codes

use clap::Parser;

use bincomp::cli::args::{Cli, Commands, ConfigCommands};
use bincomp::cli::commands::execute;
use bincomp::exitcode;

#[test]
fn given_calc_args_when_parsing_then_binary_kept_verbatim() {
    let cli = Cli::try_parse_from(["bincomp", "calc", "0010", "--no-steps"]).unwrap();
    match cli.command {
        Some(Commands::Calc { binary, no_steps }) => {
            assert_eq!(binary, "0010");
            assert!(no_steps);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_repeated_debug_flag_when_parsing_then_counted() {
    let cli = Cli::try_parse_from(["bincomp", "-dd", "interactive"]).unwrap();
    assert_eq!(cli.debug, 2);
    assert!(matches!(cli.command, Some(Commands::Interactive)));
}

#[test]
fn given_config_init_force_when_parsing_then_flag_set() {
    let cli = Cli::try_parse_from(["bincomp", "config", "init", "--force"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommands::Init { force: true }
        })
    ));
}

#[test]
fn given_add_with_one_operand_when_parsing_then_error() {
    assert!(Cli::try_parse_from(["bincomp", "add", "1"]).is_err());
}

#[test]
fn given_invalid_binary_when_executing_calc_then_dataerr() {
    let cli = Cli::try_parse_from(["bincomp", "calc", "102"]).unwrap();
    let err = execute(&cli).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::DATAERR);
    // the terminal view already printed it
    assert!(err.is_rendered());
    assert_eq!(
        err.to_string(),
        "Invalid binary number! Please enter only 0s and 1s."
    );
}

#[test]
fn given_blank_operand_when_executing_add_then_dataerr() {
    let cli = Cli::try_parse_from(["bincomp", "add", "1", " "]).unwrap();
    let err = execute(&cli).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn given_no_command_when_executing_then_usage_error() {
    let cli = Cli::try_parse_from(["bincomp"]).unwrap();
    let err = execute(&cli).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::USAGE);
}
