use super::*;

#[test]
fn parses_login_with_flags() {
    let cli = Cli::try_parse_from([
        "spa-auth",
        "--base-url",
        "https://api.example.test/",
        "login",
        "--username",
        "ada",
        "--password",
        "hunter2",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        Command::Login { username: "ada".into(), password: Some("hunter2".into()) }
    );
    assert_eq!(cli.config().login_url(), "https://api.example.test/api/login");
}

#[test]
fn parses_bare_subcommands() {
    for (arg, expected) in [
        ("refresh", Command::Refresh),
        ("logout", Command::Logout),
        ("status", Command::Status),
        ("header", Command::Header),
    ] {
        let cli = Cli::try_parse_from(["spa-auth", arg]).unwrap();
        assert_eq!(cli.command, expected);
    }
}

#[test]
fn config_carries_key_and_timeout() {
    let cli = Cli::try_parse_from(["spa-auth", "--token-key", "session", "--timeout-secs", "5", "status"]).unwrap();
    let config = cli.config();
    assert_eq!(config.token_key, "session");
    assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
}

#[test]
fn missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["spa-auth"]).is_err());
}

#[test]
fn status_labels() {
    assert_eq!(status_label(true), "authenticated");
    assert_eq!(status_label(false), "anonymous");
}
