// src/constants.rs
//
// Application-wide constants shared by the storage layer, the quiz runner
// and the report formatters.

/// Backing file of the note collection, relative to the data directory.
pub const NOTES_FILE: &str = "notes.json";

/// Backing file of the question bank, relative to the data directory.
pub const QUIZ_FILE: &str = "quiz.json";

/// Reserved for persisted statistics. Never required to exist.
pub const STATS_FILE: &str = "stats.json";

/// Config file looked up in the data directory when `--config` is not given.
pub const CONFIG_FILE: &str = "studybot.toml";

/// Directory name under the platform data dir.
pub const APP_DIR_NAME: &str = "studybot";

/// On-disk format of `created_at` / `updated_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const MIN_IMPORTANCE: u8 = 1;
pub const MAX_IMPORTANCE: u8 = 5;
pub const DEFAULT_IMPORTANCE: u8 = 3;

/// Minimum score (percent) for an exam pass and for the near-passing tier.
pub const PASS_SCORE: f64 = 60.0;

/// Session accuracy from which the "good" tier starts.
pub const GOOD_ACCURACY: f64 = 80.0;

/// Category rate from which a report marks the subject as excellent.
pub const EXCELLENT_RATE: f64 = 80.0;

/// Wrong answers listed in the simulated exam report.
pub const REPORT_WRONG_ANSWER_LIMIT: usize = 5;

/// Answer recorded by the simulator when a question offers no wrong choice.
pub const UNKNOWN_ANSWER: &str = "모름";
