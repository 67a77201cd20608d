use std::fs;
use std::sync::Arc;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::domain::{Question, Section};
use crate::repositories::{QuestionRepository, TestRepository};
use crate::services::assembly_service;
use crate::services::ingest_service::{self, IngestStats};

/// Final accounting of a seed run, for the operator-facing summary.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeedReport {
    pub reading: IngestStats,
    pub math: IngestStats,
    pub tests_created: usize,
    pub questions_inserted: usize,
}

impl SeedReport {
    pub fn total_discarded(&self) -> usize {
        self.reading.discarded + self.math.discarded
    }
}

pub struct SeedService {
    question_repository: Arc<dyn QuestionRepository>,
    test_repository: Arc<dyn TestRepository>,
}

impl SeedService {
    pub fn new(
        question_repository: Arc<dyn QuestionRepository>,
        test_repository: Arc<dyn TestRepository>,
    ) -> Self {
        Self {
            question_repository,
            test_repository,
        }
    }

    /// Runs the full batch: read both subject files, parse, assemble,
    /// re-seed the store. Missing input files are run-fatal.
    pub async fn run(&self, config: &Config) -> AppResult<SeedReport> {
        let reading_text = read_input(&config.reading_input_path)?;
        let math_text = read_input(&config.math_input_path)?;

        let mut rng: StdRng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        self.seed_from_texts(&reading_text, &math_text, &mut rng)
            .await
    }

    /// Seeds the store from already-loaded subject texts. Split out from
    /// [`run`](Self::run) so tests can drive it with a seeded RNG.
    pub async fn seed_from_texts<R: Rng>(
        &self,
        reading_text: &str,
        math_text: &str,
        rng: &mut R,
    ) -> AppResult<SeedReport> {
        let reading = ingest_service::parse_subject(reading_text, Section::ReadingAndWriting);
        let math = ingest_service::parse_subject(math_text, Section::Math);

        let mut pool = reading.questions;
        pool.extend(math.questions);

        if pool.is_empty() {
            return Err(AppError::EmptyPool(
                "no questions parsed from either subject".to_string(),
            ));
        }

        let plans = assembly_service::assemble(&pool, rng);

        // Full re-seed: the previous generation of tests and questions is
        // replaced wholesale.
        self.test_repository.delete_all().await?;
        self.question_repository.delete_all().await?;
        info!("Cleared existing tests and questions");

        let mut report = SeedReport {
            reading: reading.stats,
            math: math.stats,
            tests_created: plans.len(),
            questions_inserted: 0,
        };

        for plan in plans {
            let test = self.test_repository.insert(plan.test).await?;

            let questions: Vec<Question> = plan
                .questions
                .into_iter()
                .map(|parsed| Question::from_parsed(parsed, &test.id))
                .collect();

            let question_ids = self.question_repository.insert_many(questions).await?;
            report.questions_inserted += question_ids.len();

            self.test_repository
                .set_questions(&test.id, question_ids)
                .await?;

            info!("Created test '{}' ({})", test.title, test.id);
        }

        Ok(report)
    }
}

fn read_input(path: &str) -> AppResult<String> {
    fs::read_to_string(path).map_err(|err| AppError::IoError(format!("{}: {}", path, err)))
}
