use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::domain::{Difficulty, ParsedQuestion, Section, Test, TestSection};

/// Number of questions in every assembled practice test.
pub const TEST_SIZE: usize = 20;

/// Overall time limit of an assembled test, in minutes.
pub const TOTAL_TIME_LIMIT: i32 = 134;

/// One planned practice test: the bundle metadata plus the questions that
/// will be inserted under it, in group order.
#[derive(Clone, Debug)]
pub struct TestPlan {
    pub test: Test,
    pub questions: Vec<ParsedQuestion>,
}

/// Shuffles the pool uniformly and partitions it into complete practice
/// tests of [`TEST_SIZE`] questions.
///
/// A short final group is backfilled by sampling with replacement from the
/// original, unshuffled pool, so a question can appear in two different
/// tests. The RNG is passed in explicitly so runs are reproducible under a
/// fixed seed. An empty pool yields zero plans.
pub fn assemble<R: Rng>(pool: &[ParsedQuestion], rng: &mut R) -> Vec<TestPlan> {
    if pool.is_empty() {
        return Vec::new();
    }

    let mut shuffled: Vec<ParsedQuestion> = pool.to_vec();
    shuffled.shuffle(rng);

    let mut plans = Vec::new();
    for (index, chunk) in shuffled.chunks(TEST_SIZE).enumerate() {
        let mut group: Vec<ParsedQuestion> = chunk.to_vec();
        while group.len() < TEST_SIZE {
            group.push(pool[rng.gen_range(0..pool.len())].clone());
        }
        plans.push(plan_for_group(index + 1, group));
    }
    plans
}

fn plan_for_group(number: usize, group: Vec<ParsedQuestion>) -> TestPlan {
    let sections = Section::ALL
        .iter()
        .map(|&section| {
            let count = group.iter().filter(|q| q.section == section).count() as i32;
            TestSection::new(section, count)
        })
        .collect();

    let test = Test::new(
        &format!("Imported SAT Practice Test {}", number),
        TOTAL_TIME_LIMIT,
        Difficulty::Medium,
        sections,
    );

    TestPlan {
        test,
        questions: group,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(n: usize, section: Section) -> ParsedQuestion {
        ParsedQuestion {
            section,
            question_text: format!("Question {}?", n),
            passage: String::new(),
            choices: vec!["1".into(), "2".into()],
            correct_answer: "2".to_string(),
            explanation: "Because.".to_string(),
            difficulty: Difficulty::Medium,
            points: Difficulty::Medium.points(),
        }
    }

    fn pool(count: usize) -> Vec<ParsedQuestion> {
        (0..count)
            .map(|n| {
                let section = if n % 2 == 0 {
                    Section::ReadingAndWriting
                } else {
                    Section::Math
                };
                question(n, section)
            })
            .collect()
    }

    #[test]
    fn empty_pool_yields_zero_plans() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(assemble(&[], &mut rng).is_empty());
    }

    #[test]
    fn exact_multiple_produces_unpadded_tests() {
        let pool = pool(20);
        let mut rng = StdRng::seed_from_u64(1);
        let plans = assemble(&pool, &mut rng);

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].questions.len(), TEST_SIZE);

        // No padding: the single test holds exactly the pool's questions.
        let mut expected: Vec<String> = pool.iter().map(|q| q.question_text.clone()).collect();
        let mut actual: Vec<String> = plans[0]
            .questions
            .iter()
            .map(|q| q.question_text.clone())
            .collect();
        expected.sort();
        actual.sort();
        assert_eq!(expected, actual);
    }

    #[test]
    fn one_extra_question_pads_a_second_test() {
        let pool = pool(21);
        let mut rng = StdRng::seed_from_u64(7);
        let plans = assemble(&pool, &mut rng);

        assert_eq!(plans.len(), 2);
        assert!(plans.iter().all(|p| p.questions.len() == TEST_SIZE));
    }

    #[test]
    fn undersized_pool_is_fully_padded_into_one_test() {
        let pool = pool(3);
        let mut rng = StdRng::seed_from_u64(3);
        let plans = assemble(&pool, &mut rng);

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].questions.len(), TEST_SIZE);
    }

    #[test]
    fn section_counts_match_group_composition() {
        let pool = pool(21);
        let mut rng = StdRng::seed_from_u64(11);

        for plan in assemble(&pool, &mut rng) {
            let declared: i32 = plan.test.sections.iter().map(|s| s.questions_count).sum();
            assert_eq!(declared as usize, plan.questions.len());

            for section in Section::ALL {
                let actual = plan
                    .questions
                    .iter()
                    .filter(|q| q.section == section)
                    .count() as i32;
                let summary = plan
                    .test
                    .sections
                    .iter()
                    .find(|s| s.name == section.label())
                    .unwrap();
                assert_eq!(summary.questions_count, actual);
            }
        }
    }

    #[test]
    fn tests_are_numbered_and_carry_fixed_limits() {
        let pool = pool(40);
        let mut rng = StdRng::seed_from_u64(5);
        let plans = assemble(&pool, &mut rng);

        assert_eq!(plans[0].test.title, "Imported SAT Practice Test 1");
        assert_eq!(plans[1].test.title, "Imported SAT Practice Test 2");
        assert!(plans
            .iter()
            .all(|p| p.test.time_limit == TOTAL_TIME_LIMIT
                && p.test.difficulty == Difficulty::Medium));
    }

    #[test]
    fn same_seed_reproduces_the_same_assembly() {
        let pool = pool(33);

        let mut first_rng = StdRng::seed_from_u64(99);
        let mut second_rng = StdRng::seed_from_u64(99);
        let first = assemble(&pool, &mut first_rng);
        let second = assemble(&pool, &mut second_rng);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.questions, b.questions);
        }
    }

    #[test]
    fn different_seeds_usually_shuffle_differently() {
        let pool = pool(33);

        let mut first_rng = StdRng::seed_from_u64(1);
        let mut second_rng = StdRng::seed_from_u64(2);
        let first = assemble(&pool, &mut first_rng);
        let second = assemble(&pool, &mut second_rng);

        assert_ne!(first[0].questions, second[0].questions);
    }
}
