use clap::Parser;
use std::path::PathBuf;
use studybot::cli::args::{Args, Command};
use studybot::domain::Category;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["studybot"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_add_with_menu_key_when_parsing_then_category_is_resolved() {
    // Arrange
    let args = vec![
        "studybot", "add", "--category", "2", "--title", "방화벽", "--content", "본문",
        "--keywords", "fw, acl", "--importance", "9",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Add {
            category,
            title,
            subcategory,
            keywords,
            importance,
            ..
        } => {
            assert_eq!(category, Category::Network);
            assert_eq!(title, "방화벽");
            assert_eq!(subcategory, "");
            assert_eq!(keywords.as_deref(), Some("fw, acl"));
            assert_eq!(importance.as_deref(), Some("9"));
        }
        _ => panic!("Expected Add command"),
    }
}

#[test]
fn given_unknown_category_when_parsing_then_fails() {
    // Arrange
    let args = vec!["studybot", "list", "--category", "9"];

    // Act & Assert
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn given_view_with_flags_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["studybot", "view", "a1b2c3d4", "--json", "--toggle-mastered"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::View {
            note_id,
            json,
            toggle_mastered,
        } => {
            assert_eq!(note_id, "a1b2c3d4");
            assert!(json);
            assert!(toggle_mastered);
        }
        _ => panic!("Expected View command"),
    }
    assert_eq!(parsed.data_dir, None);
    assert_eq!(parsed.config, None);
}

#[test]
fn given_global_flags_after_subcommand_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["studybot", "delete", "a1b2c3d4", "-d", "/tmp/study", "-vv"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert!(matches!(parsed.command, Command::Delete { ref note_id } if note_id == "a1b2c3d4"));
    assert_eq!(parsed.data_dir, Some(PathBuf::from("/tmp/study")));
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_repeated_choices_when_parsing_add_quiz_then_keeps_order() {
    // Arrange
    let args = vec![
        "studybot", "add-quiz", "--category", "law", "--question", "개인정보 보호법의 소관 기관은?",
        "--choice", "개인정보보호위원회", "--choice", "방송통신위원회", "--answer", "1",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::AddQuiz {
            category,
            choices,
            answer,
            explanation,
            ..
        } => {
            assert_eq!(category, Category::ManagementAndLaw);
            assert_eq!(choices, vec!["개인정보보호위원회", "방송통신위원회"]);
            assert_eq!(answer, "1");
            assert_eq!(explanation, "");
        }
        _ => panic!("Expected AddQuiz command"),
    }
}

#[test]
fn given_quiz_with_non_numeric_count_when_parsing_then_keeps_raw_text() {
    // Arrange
    let args = vec!["studybot", "quiz", "--count", "many"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Quiz { category, count } => {
            assert_eq!(category, None);
            assert_eq!(count.as_deref(), Some("many"));
        }
        _ => panic!("Expected Quiz command"),
    }
}

#[test]
fn given_simulate_with_output_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["studybot", "simulate", "--count", "20", "-o", "report.md", "--seed", "7"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Simulate {
            count,
            output,
            seed,
        } => {
            assert_eq!(count, Some(20));
            assert_eq!(output, Some(PathBuf::from("report.md")));
            assert_eq!(seed, Some(7));
        }
        _ => panic!("Expected Simulate command"),
    }
}
