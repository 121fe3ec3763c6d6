use super::*;

#[test]
fn parses_send_without_an_amount() {
    let cli = Cli::try_parse_from(["payshield-cli", "send"]).expect("expected valid cli args");

    assert!(matches!(cli.command, Some(Commands::Send { amount: None })));
}

#[test]
fn parses_send_with_an_amount() {
    let cli = Cli::try_parse_from(["payshield-cli", "send", "--amount", "125.50"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Send { amount: Some(ref a) }) if a == "125.50"
    ));
}

#[test]
fn parses_identity_command() {
    let cli = Cli::try_parse_from(["payshield-cli", "identity"]).expect("expected valid cli args");

    assert!(matches!(cli.command, Some(Commands::Identity)));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["payshield-cli"]).expect("expected valid cli args");

    assert!(cli.command.is_none());
}

#[test]
fn rejects_unknown_subcommands() {
    assert!(Cli::try_parse_from(["payshield-cli", "score"]).is_err());
}
