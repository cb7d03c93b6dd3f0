use super::*;
use clap::Parser;

#[test]
fn ask_parses_query_including_leading_hyphen() {
    let cli = Cli::try_parse_from(["counsel", "ask", "-what now"]).expect("parse");
    match cli.command {
        Commands::Ask(AskArgs { query }) => assert_eq!(query, "-what now"),
        _ => panic!("expected ask command"),
    }
}

#[test]
fn classify_parses_explain_flag() {
    let cli = Cli::try_parse_from(["counsel", "classify", "what is bail", "--explain"])
        .expect("parse");
    match cli.command {
        Commands::Classify(ClassifyArgs { query, explain }) => {
            assert_eq!(query, "what is bail");
            assert!(explain);
        }
        _ => panic!("expected classify command"),
    }
}

#[test]
fn classify_explain_defaults_off() {
    let cli = Cli::try_parse_from(["counsel", "classify", "what is bail"]).expect("parse");
    match cli.command {
        Commands::Classify(ClassifyArgs { explain, .. }) => assert!(!explain),
        _ => panic!("expected classify command"),
    }
}

#[test]
fn topics_show_requires_a_key() {
    let cli = Cli::try_parse_from(["counsel", "topics", "show", "bail"]).expect("parse");
    match cli.command {
        Commands::Topics(TopicsArgs {
            command: TopicsCommand::Show { key },
        }) => assert_eq!(key, "bail"),
        _ => panic!("expected topics show command"),
    }
    assert!(Cli::try_parse_from(["counsel", "topics", "show"]).is_err());
}

#[test]
fn root_defaults_to_dot_counsel() {
    let cli = Cli::try_parse_from(["counsel", "status"]).expect("parse");
    assert_eq!(cli.root, std::path::PathBuf::from(".counsel"));
}
