// src/application/seeder.rs
//
// Synthetic data seeding from one fixed vocabulary per exam subject.
use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use strum::IntoEnumIterator;
use tracing::info;

use crate::application::{NoteRepository, QuizRepository};
use crate::domain::{new_short_id, Category, DomainError, Importance, QuizQuestion, StudyNote};

struct Vocabulary {
    topics: &'static [&'static str],
    attacks: &'static [&'static str],
}

fn vocabulary(category: Category) -> Vocabulary {
    match category {
        Category::System => Vocabulary {
            topics: &["Linux 권한", "Windows 인증", "로그 분석", "RAID", "Inode", "SetUID"],
            attacks: &["Buffer Overflow", "Race Condition", "Format String", "Rootkit"],
        },
        Category::Network => Vocabulary {
            topics: &["OSI 7 Layer", "TCP/IP", "VPN", "Firewall", "IDS/IPS", "NAC"],
            attacks: &["Syn Flooding", "Spoofing", "Sniffing", "Session Hijacking", "DDoS"],
        },
        Category::Application => Vocabulary {
            topics: &["SDLC", "DB 보안", "암호화 알고리즘", "전자서명", "PKI"],
            attacks: &["SQL Injection", "XSS", "CSRF", "Web Shell", "File Upload"],
        },
        Category::General => Vocabulary {
            topics: &["접근통제 모델(MAC/DAC/RBAC)", "보안 3요소", "재해복구(DRS)", "BCP"],
            attacks: &["Social Engineering", "APT", "Ransomware"],
        },
        Category::ManagementAndLaw => Vocabulary {
            topics: &["정보통신망법", "개인정보보호법", "기반보호법", "ISMS-P 인증", "CISO 지정"],
            attacks: &["Compliance 위반", "개인정보 유출"],
        },
    }
}

const CORRECT_RESPONSE: &str = "보안 설정 강화 및 최신 패치 적용";
const DISTRACTORS: [&str; 3] = ["시스템 재부팅", "로그 삭제", "네트워크 차단"];

fn pick<'a, G: Rng + ?Sized>(items: &'a [&'a str], rng: &mut G) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn random_category<G: Rng + ?Sized>(rng: &mut G) -> Category {
    let all: Vec<Category> = Category::iter().collect();
    all.choose(rng).copied().unwrap_or(Category::System)
}

/// Record `id` in `issued`, drawing replacements while it is already taken.
fn claim_unique_id(
    issued: &mut HashSet<String>,
    mut id: String,
    mut draw: impl FnMut() -> String,
) -> String {
    while !issued.insert(id.clone()) {
        id = draw();
    }
    id
}

/// Build `count` multiple choice questions, numbered from 1, with distinct ids.
pub fn generate_quizzes<G: Rng + ?Sized>(
    count: usize,
    rng: &mut G,
) -> Result<Vec<QuizQuestion>, DomainError> {
    let mut issued = HashSet::with_capacity(count);
    (1..=count)
        .map(|i| -> Result<QuizQuestion, DomainError> {
            let category = random_category(rng);
            let vocab = vocabulary(category);
            let topic = pick(vocab.topics, rng);
            let attack = pick(vocab.attacks, rng);

            let mut choices: Vec<String> = std::iter::once(CORRECT_RESPONSE)
                .chain(DISTRACTORS)
                .map(str::to_string)
                .collect();
            choices.shuffle(rng);
            let answer_index = choices
                .iter()
                .position(|c| c == CORRECT_RESPONSE)
                .unwrap_or_default();

            let question = format!(
                "[{category}] {topic} 환경에서 발생하는 '{attack}' 공격의 대응 방안으로 적절한 것은? (문제은행 #{i})"
            );
            let mut quiz = QuizQuestion::multiple_choice(question, category, choices, answer_index)?
                .with_explanation(format!(
                    "{attack} 공격은 {topic}의 취약점을 이용하므로 근본적인 패치가 필요합니다."
                ));
            quiz.question_id =
                claim_unique_id(&mut issued, std::mem::take(&mut quiz.question_id), new_short_id);
            Ok(quiz)
        })
        .collect()
}

/// Build `count` summary notes, numbered from 1, with distinct ids.
pub fn generate_notes<G: Rng + ?Sized>(count: usize, rng: &mut G) -> Vec<StudyNote> {
    let mut issued = HashSet::with_capacity(count);
    (1..=count)
        .map(|i| {
            let category = random_category(rng);
            let vocab = vocabulary(category);
            let topic = pick(vocab.topics, rng);
            let attack = pick(vocab.attacks, rng);

            let mut note = StudyNote::new(
                format!("[{category}] 기출 핵심 요약 #{i}"),
                category,
                format!("{category} 과목 필수 암기 사항입니다.\n- {topic}\n- {attack}"),
            )
            .with_subcategory(pick(category.subcategories(), rng))
            .with_keywords([topic, attack])
            .with_importance(Importance::new(rng.gen_range(3..=5)));
            note.note_id = claim_unique_id(&mut issued, std::mem::take(&mut note.note_id), new_short_id);
            note
        })
        .collect()
}

pub struct Seeder<R: NoteRepository + QuizRepository> {
    repository: R,
}

impl<R: NoteRepository + QuizRepository> Seeder<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Replace both collections with freshly generated records.
    pub fn seed<G: Rng + ?Sized>(
        &mut self,
        notes: usize,
        quizzes: usize,
        rng: &mut G,
    ) -> Result<(usize, usize), DomainError> {
        let quiz_bank = generate_quizzes(quizzes, rng)?;
        self.repository.replace_quizzes(&quiz_bank)?;

        let note_set = generate_notes(notes, rng);
        self.repository.replace_notes(&note_set)?;

        info!(quizzes = quiz_bank.len(), notes = note_set.len(), "Seeded collections");
        Ok((note_set.len(), quiz_bank.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MockStudyRepository;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn given_count_when_generating_quizzes_then_answer_is_always_a_choice() {
        let mut rng = StdRng::seed_from_u64(42);

        let quizzes = generate_quizzes(50, &mut rng).unwrap();

        assert_eq!(quizzes.len(), 50);
        for quiz in &quizzes {
            assert_eq!(quiz.choices().len(), 4);
            assert_eq!(quiz.answer(), CORRECT_RESPONSE);
            assert!(quiz.question.contains(&quiz.category.to_string()));
        }
    }

    #[test]
    fn given_count_when_generating_notes_then_importance_between_three_and_five() {
        let mut rng = StdRng::seed_from_u64(42);

        let notes = generate_notes(30, &mut rng);

        assert_eq!(notes.len(), 30);
        assert!(notes.iter().all(|n| (3..=5).contains(&n.importance.value())));
        assert!(notes.iter().all(|n| n.keywords.len() == 2));
        assert!(notes.iter().all(|n| n.category.subcategories().contains(&n.subcategory.as_str())));
    }

    #[test]
    fn given_large_batch_when_generating_then_ids_are_unique() {
        let mut rng = StdRng::seed_from_u64(1);

        let quizzes = generate_quizzes(10_000, &mut rng).unwrap();
        let notes = generate_notes(2_000, &mut rng);

        let quiz_ids: HashSet<&str> = quizzes.iter().map(|q| q.question_id.as_str()).collect();
        let note_ids: HashSet<&str> = notes.iter().map(|n| n.note_id.as_str()).collect();
        assert_eq!(quiz_ids.len(), 10_000);
        assert_eq!(note_ids.len(), 2_000);
    }

    #[test]
    fn given_colliding_draws_when_claiming_id_then_redraws_until_free() {
        let mut issued: HashSet<String> = ["aaaa0001", "aaaa0002"].map(String::from).into();
        let mut draws = vec!["aaaa0002", "aaaa0003"].into_iter().map(String::from);

        let id = claim_unique_id(&mut issued, "aaaa0001".to_string(), || {
            draws.next().unwrap()
        });

        assert_eq!(id, "aaaa0003");
        assert_eq!(issued.len(), 3);
    }

    #[test]
    fn given_existing_data_when_seeding_then_collections_are_replaced() {
        let old = StudyNote::new("old", Category::System, "old");
        let mut seeder = Seeder::new(MockStudyRepository::builder().with_note(old).build());
        let mut rng = StdRng::seed_from_u64(1);

        let (notes, quizzes) = seeder.seed(5, 8, &mut rng).unwrap();

        assert_eq!((notes, quizzes), (5, 8));
        assert_eq!(seeder.repository.all_notes().unwrap().len(), 5);
        assert_eq!(seeder.repository.all_quizzes().unwrap().len(), 8);
    }
}
