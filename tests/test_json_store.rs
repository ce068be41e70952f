mod helpers;

use anyhow::Result;
use helpers::{sample_notes, TestDataDir};
use studybot::application::{NoteRepository, QuizRepository, StudyRepository};
use studybot::domain::{Category, QuizQuestion, StudyNote};

#[test]
fn given_saved_note_when_loading_with_new_store_then_round_trips() -> Result<()> {
    // Arrange
    let data = TestDataDir::new()?;
    let note = StudyNote::new("접근통제 모델", Category::System, "BLP, Biba, 클락-윌슨")
        .with_subcategory("접근통제")
        .with_keywords(["BLP", "Biba"]);
    data.store().save_note(&note)?;

    // Act
    let loaded = data.store().get_note(&note.note_id)?;

    // Assert
    assert_eq!(loaded, Some(note));
    Ok(())
}

#[test]
fn given_same_note_saved_twice_when_listing_then_single_entry_with_latest_fields() -> Result<()> {
    // Arrange
    let data = TestDataDir::new()?;
    let mut store = data.store();
    store.replace_notes(&sample_notes())?;
    let mut note = StudyNote::new("원래 제목", Category::Network, "내용");
    store.save_note(&note)?;

    // Act
    note.title = "바뀐 제목".to_string();
    store.save_note(&note)?;

    // Assert
    let all = store.all_notes()?;
    assert_eq!(all.len(), 4);
    assert_eq!(all[3].note_id, note.note_id);
    assert_eq!(all[3].title, "바뀐 제목");
    Ok(())
}

#[test]
fn given_first_note_edited_when_saving_then_keeps_its_position() -> Result<()> {
    // Arrange
    let data = TestDataDir::new()?;
    let mut store = data.store();
    let mut first = StudyNote::new("a", Category::System, "첫 번째");
    let second = StudyNote::new("b", Category::Network, "두 번째");
    store.save_note(&first)?;
    store.save_note(&second)?;

    // Act
    first.title = "a2".to_string();
    data.store().save_note(&first)?;

    // Assert
    let titles: Vec<String> = data.store().all_notes()?.into_iter().map(|n| n.title).collect();
    assert_eq!(titles, vec!["a2", "b"]);
    Ok(())
}

#[test]
fn given_first_quiz_edited_when_saving_then_keeps_its_position() -> Result<()> {
    // Arrange
    let data = TestDataDir::new()?;
    let mut store = data.store();
    let mut first = QuizQuestion::free_text("a", Category::System, "A");
    let second = QuizQuestion::free_text("b", Category::Network, "B");
    store.save_quiz(&first)?;
    store.save_quiz(&second)?;

    // Act
    first.question = "a2".to_string();
    first.record_attempt(true);
    data.store().save_quiz(&first)?;

    // Assert
    let quizzes = data.store().all_quizzes()?;
    let questions: Vec<&str> = quizzes.iter().map(|q| q.question.as_str()).collect();
    assert_eq!(questions, vec!["a2", "b"]);
    assert_eq!(quizzes[0].correct_count, 1);
    Ok(())
}

#[test]
fn given_existing_and_unknown_ids_when_deleting_then_reports_removal() -> Result<()> {
    // Arrange
    let data = TestDataDir::new()?;
    let mut store = data.store();
    let notes = sample_notes();
    store.replace_notes(&notes)?;

    // Act
    let removed = store.delete_note(&notes[1].note_id)?;
    let missing = store.delete_note("nonexist")?;

    // Assert
    assert!(removed);
    assert!(!missing);
    assert_eq!(store.all_notes()?.len(), 2);
    assert_eq!(store.get_note(&notes[1].note_id)?, None);
    Ok(())
}

#[test]
fn given_korean_keyword_when_searching_then_finds_note_by_title() -> Result<()> {
    // Arrange
    let data = TestDataDir::new()?;
    let mut store = data.store();
    store.replace_notes(&sample_notes())?;

    // Act
    let found = store.search_notes("암호")?;

    // Assert
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "암호학 기초");
    Ok(())
}

#[test]
fn given_keyword_in_other_case_when_searching_then_matches_keywords() -> Result<()> {
    // Arrange
    let data = TestDataDir::new()?;
    let mut store = data.store();
    store.replace_notes(&sample_notes())?;

    // Act
    let found = store.search_notes("owasp")?;

    // Assert
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "SQL Injection");
    Ok(())
}

#[test]
fn given_korean_text_when_saving_then_file_is_not_escaped() -> Result<()> {
    // Arrange
    let data = TestDataDir::new()?;
    let mut store = data.store();

    // Act
    store.save_note(&StudyNote::new("암호학 기초", Category::General, "대칭키"))?;

    // Assert
    let raw = data.read_notes_file()?;
    assert!(raw.contains("암호학 기초"));
    assert!(raw.contains("정보보안 일반"));
    assert!(!raw.contains("\\u"));
    Ok(())
}

#[test]
fn given_empty_data_dir_when_loading_then_collections_are_empty() -> Result<()> {
    // Arrange
    let data = TestDataDir::new()?;
    let store = data.store();

    // Act
    let notes = store.all_notes()?;
    let quizzes = store.all_quizzes()?;
    let stats = store.stats()?;

    // Assert
    assert!(notes.is_empty());
    assert!(quizzes.is_empty());
    assert_eq!(stats.total_notes, 0);
    assert_eq!(stats.quiz_stats.accuracy(), 0.0);
    Ok(())
}

#[test]
fn given_minimal_quiz_record_when_loading_then_defaults_are_applied() -> Result<()> {
    // Arrange
    let data = TestDataDir::new()?;
    let store = data.store();
    std::fs::write(
        store.quiz_path(),
        r#"[{"question_id": "q1", "question": "SYN Flooding의 대응책은?", "category": "네트워크 보안", "answer": "SYN Cookie"}]"#,
    )?;

    // Act
    let quizzes = store.all_quizzes()?;

    // Assert
    assert_eq!(quizzes.len(), 1);
    assert_eq!(quizzes[0].category, Category::Network);
    assert!(quizzes[0].choices().is_empty());
    assert_eq!(quizzes[0].answer(), "SYN Cookie");
    assert_eq!(quizzes[0].attempts(), 0);
    Ok(())
}

#[test]
fn given_answer_outside_choices_when_loading_then_fails() -> Result<()> {
    // Arrange
    let data = TestDataDir::new()?;
    let store = data.store();
    std::fs::write(
        store.quiz_path(),
        r#"[{"question_id": "q1", "question": "Q", "category": "시스템 보안", "choices": ["A", "B"], "answer": "C"}]"#,
    )?;

    // Act
    let result = store.all_quizzes();

    // Assert
    assert!(result.is_err());
    Ok(())
}

#[test]
fn given_quizzes_in_two_categories_when_filtering_then_exact_match_only() -> Result<()> {
    // Arrange
    let data = TestDataDir::new()?;
    let mut store = data.store();
    store.save_quiz(&QuizQuestion::free_text("Q1", Category::System, "A"))?;
    store.save_quiz(&QuizQuestion::free_text("Q2", Category::Network, "B"))?;

    // Act
    let system = store.quizzes_by_category(Category::System)?;

    // Assert
    assert_eq!(system.len(), 1);
    assert_eq!(system[0].question, "Q1");
    Ok(())
}
