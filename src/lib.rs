// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use application::{
    ExamSimulator, NoteChanges, NoteDeleter, NoteDraft, NoteEditor, NoteLister, NoteViewer,
    QuestionDraft, QuizBank, QuizRepository, QuizScope, QuizSession, Seeder, SessionStart,
    StudyRepository,
};
use cli::args::{Args, Command};
use cli::prompt::TerminalRespondent;
use domain::{note::parse_keywords, Importance};
use infrastructure::{Config, JsonStore};
use ports::{ExamReportPresenter, TextPresenter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting studybot with arguments");

    // Initialize infrastructure
    let data_dir = match args.data_dir {
        Some(path) => {
            debug!(?path, "Using provided data directory");
            path
        }
        None => find_data_dir()?,
    };
    let config_path = args
        .config
        .unwrap_or_else(|| data_dir.join(constants::CONFIG_FILE));
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    let store = JsonStore::new(&data_dir);

    let presenter = TextPresenter::new();

    match args.command {
        Command::Add {
            category,
            title,
            content,
            subcategory,
            keywords,
            importance,
        } => {
            let mut draft = NoteDraft::new(title, category, read_content(content)?);
            draft.subcategory = subcategory;
            draft.keywords = keywords.as_deref().map(parse_keywords).unwrap_or_default();
            draft.importance = importance
                .as_deref()
                .map(Importance::parse_or_default)
                .unwrap_or_default();

            let note = NoteEditor::new(store).create_note(draft)?;
            info!(note_id = %note.note_id, "Added note");
            println!("노트가 저장되었습니다. (ID: {})", note.note_id);
        }

        Command::List { category } => {
            let notes = NoteLister::new(store).list_notes(category)?;
            if notes.is_empty() {
                println!("등록된 노트가 없습니다.");
            } else {
                let groups = application::note_lister::group_by_category(notes);
                println!("{}", presenter.note_groups(&groups));
            }
        }

        Command::Search { keyword } => {
            let found = NoteLister::new(store).search_notes(&keyword)?;
            if !keyword.trim().is_empty() {
                println!("\n  검색 결과: {}개\n", found.len());
            }
            for note in &found {
                println!("  {}", presenter.note_summary(note));
            }
        }

        Command::View {
            note_id,
            json,
            toggle_mastered,
        } => {
            let mut viewer = NoteViewer::new(store);
            info!(%note_id, "Viewing note");
            let Some(mut note) = viewer.view_note(&note_id)? else {
                println!("노트를 찾을 수 없습니다: {note_id}");
                return Ok(());
            };
            if toggle_mastered {
                if let Some(toggled) = viewer.toggle_mastered(&note_id)? {
                    note = toggled;
                }
            }

            if json {
                let rendered =
                    serde_json::to_string_pretty(&note).context("Failed to serialize note")?;
                println!("{rendered}");
            } else {
                println!("{}", presenter.note_detail(&note));
            }
        }

        Command::Edit {
            note_id,
            title,
            subcategory,
            content,
            keywords,
            importance,
        } => {
            let changes = NoteChanges {
                title,
                subcategory,
                content: content.map(read_content).transpose()?,
                keywords: keywords.as_deref().map(parse_keywords),
                importance: importance.as_deref().map(Importance::parse_or_default),
            };
            match NoteEditor::new(store).edit_note(&note_id, changes)? {
                Some(note) => println!("노트가 수정되었습니다. (ID: {})", note.note_id),
                None => println!("노트를 찾을 수 없습니다: {note_id}"),
            }
        }

        Command::Delete { note_id } => {
            if NoteDeleter::new(store).delete_note(&note_id)? {
                println!("노트가 삭제되었습니다. (ID: {note_id})");
            } else {
                println!("노트를 찾을 수 없습니다: {note_id}");
            }
        }

        Command::AddQuiz {
            category,
            question,
            choices,
            answer,
            explanation,
        } => {
            let draft = QuestionDraft {
                question,
                category,
                choices,
                answer,
                explanation,
            };
            let quiz = QuizBank::new(store).add_question(draft)?;
            println!("퀴즈가 저장되었습니다. (ID: {})", quiz.question_id);
        }

        Command::Quiz { category, count } => {
            let scope = category.map_or(QuizScope::All, QuizScope::Category);
            let requested = parse_count(count.as_deref()).or(config.quiz.default_count);
            run_quiz(store, scope, requested, &presenter)?;
        }

        Command::Stats { json } => {
            let stats = store.stats()?;
            if json {
                let rendered =
                    serde_json::to_string_pretty(&stats).context("Failed to serialize stats")?;
                println!("{rendered}");
            } else {
                println!("{}", presenter.stats(&stats));
            }
        }

        Command::Categories => {
            println!("{}", presenter.header("정보보안기사 과목 구조"));
            println!("{}", presenter.category_structure());
        }

        Command::Seed {
            notes,
            quizzes,
            seed,
        } => {
            let notes = notes.unwrap_or(config.seed.notes);
            let quizzes = quizzes.unwrap_or(config.seed.quizzes);
            let mut rng = seeded_rng(seed);
            let (notes, quizzes) = Seeder::new(store).seed(notes, quizzes, &mut rng)?;
            println!("샘플 데이터 생성 완료: 노트 {notes}개, 퀴즈 {quizzes}개");
        }

        Command::Simulate {
            count,
            output,
            seed,
        } => {
            let bank = store.all_quizzes()?;
            if bank.is_empty() {
                println!("퀴즈 데이터가 없습니다. 먼저 seed 명령으로 문제를 생성하세요.");
                return Ok(());
            }
            let size = count.unwrap_or(config.simulation.exam_size);
            let mut rng = seeded_rng(seed);
            let exam = ExamSimulator::new(config.simulation.profile).sit_exam(&bank, size, &mut rng);
            let report = ExamReportPresenter::new().render(&exam);

            match output {
                Some(path) => {
                    write_report(&path, &report)?;
                    println!("시뮬레이션 리포트 저장: {}", path.display());
                }
                None => println!("{report}"),
            }
        }
    }

    Ok(())
}

fn run_quiz<R: QuizRepository>(
    repository: R,
    scope: QuizScope,
    requested: Option<usize>,
    presenter: &TextPresenter,
) -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut session = match QuizSession::start(repository, scope, requested, &mut rng)? {
        SessionStart::NoQuestions => {
            println!("풀 수 있는 퀴즈가 없습니다.");
            return Ok(());
        }
        SessionStart::Ready(session) => session,
    };
    info!(questions = session.len(), "Starting quiz session");

    let stdin = io::stdin();
    let mut respondent = TerminalRespondent::new(stdin.lock(), io::stdout());
    let summary = session.run(&mut respondent)?;
    println!("{}", presenter.session_summary(&summary));
    Ok(())
}

/// Lenient `--count`: anything that is not a positive number selects the whole pool.
fn parse_count(input: Option<&str>) -> Option<usize> {
    let input = input?;
    match input.trim().parse::<usize>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            warn!(input, "Ignoring invalid question count");
            None
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// `-` reads the body from stdin.
fn read_content(content: String) -> Result<String> {
    if content != "-" {
        return Ok(content);
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read content from stdin")?;
    Ok(buffer.trim_end().to_string())
}

fn write_report(path: &Path, report: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, report)
        .with_context(|| format!("Failed to write report to {}", path.display()))
}

pub fn find_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not find data directory")?;
    Ok(base.join(constants::APP_DIR_NAME))
}
