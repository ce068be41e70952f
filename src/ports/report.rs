// src/ports/report.rs
use crate::application::SimulatedExam;
use crate::constants::{REPORT_WRONG_ANSWER_LIMIT, TIMESTAMP_FORMAT};
use crate::domain::CategoryBand;
use std::fmt::Write;
use tracing::instrument;

/// Markdown report of a simulated exam.
#[derive(Debug, Default)]
pub struct ExamReportPresenter;

impl ExamReportPresenter {
    pub fn new() -> Self {
        Self
    }

    #[instrument(level = "debug", skip_all)]
    pub fn render(&self, exam: &SimulatedExam) -> String {
        let verdict = format!("**{}**", exam.verdict().label());

        let mut report = String::new();
        let _ = writeln!(report, "# AI 모의고사 분석 리포트 (시뮬레이션)");
        let _ = writeln!(
            report,
            "> 확률 기반 시뮬레이션 결과이며 실제 퀴즈 기록과 무관합니다.\n"
        );
        let _ = writeln!(report, "**실행 일시:** {}  ", exam.taken_at.format(TIMESTAMP_FORMAT));
        let _ = writeln!(
            report,
            "**응시 모델:** {} ({})\n",
            exam.profile.name, exam.profile.version
        );

        let _ = writeln!(report, "## 종합 결과");
        let _ = writeln!(report, "- **총 문제 수:** {}문항", exam.total());
        let _ = writeln!(report, "- **정답 수:** {}문항", exam.correct());
        let _ = writeln!(report, "- **최종 점수:** **{:.1}점**", exam.score());
        let _ = writeln!(report, "- **판정:** {verdict}\n");

        let _ = writeln!(report, "## 과목별 성취도");
        let _ = writeln!(report, "| 과목명 | 문제 수 | 정답 수 | 정답률 | 상태 |");
        let _ = writeln!(report, "| :--- | :---: | :---: | :---: | :---: |");
        for result in exam.category_results() {
            let rate = result.rate();
            let _ = writeln!(
                report,
                "| {} | {} | {} | {:.1}% | {} |",
                result.category,
                result.total,
                result.correct,
                rate,
                CategoryBand::from_rate(rate).label()
            );
        }

        let _ = writeln!(report, "\n## AI 오답 노트 (일부 발췌)");
        let mut wrong = exam.wrong_answers().take(REPORT_WRONG_ANSWER_LIMIT).peekable();
        if wrong.peek().is_none() {
            let _ = writeln!(report, "- 오답이 없습니다! 완벽합니다.");
        }
        for answer in wrong {
            let _ = writeln!(report, "- **[Q]** {}", answer.question);
            let _ = writeln!(report, "  - AI 답: {}", answer.solver_answer);
            let _ = writeln!(report, "  - 정답: {}", answer.correct_answer);
            let _ = writeln!(report, "  - 원인: {}\n", answer.reasoning);
        }

        report
    }
}
