use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb_uri: String,
    pub mongo_db_name: String,
    pub questions_collection: String,
    pub tests_collection: String,
    pub reading_input_path: String,
    pub math_input_path: String,
    /// Fixed RNG seed for reproducible assembly; random when unset.
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "satbank".to_string()),
            questions_collection: env::var("QUESTIONS_COLLECTION")
                .unwrap_or_else(|_| "questions".to_string()),
            tests_collection: env::var("TESTS_COLLECTION")
                .unwrap_or_else(|_| "tests".to_string()),
            reading_input_path: env::var("READING_INPUT_PATH")
                .unwrap_or_else(|_| "reading_sample.txt".to_string()),
            math_input_path: env::var("MATH_INPUT_PATH")
                .unwrap_or_else(|_| "math_sample.txt".to_string()),
            rng_seed: env::var("SEED_RNG").ok().and_then(|s| s.parse().ok()),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "satbank-test".to_string(),
            questions_collection: "questions".to_string(),
            tests_collection: "tests".to_string(),
            reading_input_path: "reading_sample.txt".to_string(),
            math_input_path: "math_sample.txt".to_string(),
            rng_seed: Some(42),
        }
    }
}
