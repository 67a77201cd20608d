use std::process;
use std::sync::Arc;

use satbank_seeder::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuestionRepository, MongoTestRepository},
    services::{SeedReport, SeedService},
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();

    match run(&config).await {
        Ok(report) => log_report(&report),
        Err(err) => {
            log::error!("Seed run aborted: {}", err);
            process::exit(1);
        }
    }
}

async fn run(config: &Config) -> AppResult<SeedReport> {
    let db = Database::connect(config).await?;

    let question_repository = Arc::new(MongoQuestionRepository::new(
        &db,
        &config.questions_collection,
    ));
    question_repository.ensure_indexes().await?;
    let test_repository = Arc::new(MongoTestRepository::new(&db, &config.tests_collection));

    let service = SeedService::new(question_repository, test_repository);
    service.run(config).await
}

fn log_report(report: &SeedReport) {
    log::info!(
        "Reading and Writing: {} parsed, {} discarded",
        report.reading.parsed,
        report.reading.discarded
    );
    log::info!(
        "Math: {} parsed, {} discarded",
        report.math.parsed,
        report.math.discarded
    );
    log::info!(
        "Seeding complete: {} tests, {} questions inserted",
        report.tests_created,
        report.questions_inserted
    );
}
