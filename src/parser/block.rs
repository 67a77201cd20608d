use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{Difficulty, ParsedQuestion, Section};
use crate::parser::fields;
use crate::parser::{BlockDiscard, DiscardReason};

/// Stands in for choice bodies the upstream PDF extraction dropped
/// (embedded images and equations come through as nothing).
pub const MISSING_CONTENT_PLACEHOLDER: &str = "[Image/Equation missing from PDF]";

/// Fallback rationale when extraction yields nothing.
pub const DEFAULT_EXPLANATION: &str = "No explanation provided.";

const CORRECT_ANSWER_HEADER: &str = "Correct Answer:";
const RATIONALE_HEADER: &str = "Rationale";
const DIFFICULTY_HEADER: &str = "Question Difficulty:";
const BOILERPLATE_MARKER: &str = "Assessment";

/// Optional item-identifier line at the top of a block.
static ID_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^ID:\s*([a-f0-9]+)\s*$").expect("valid id line regex"));

/// The answer-key marker separating the question part from the answer part.
/// Tolerates being glued to the end of a content line.
static ANSWER_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bID:\s*[a-f0-9]+\s*Answer\s*$").expect("valid answer marker regex"));

/// A lettered choice marker opening a line, e.g. `B. 42`.
static CHOICE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-D])\.(?:\s(.*))?$").expect("valid choice marker regex"));

static DIFFICULTY_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(Easy|Medium|Hard)$").expect("valid difficulty label regex"));

/// One state per structural region of a block. Transitions only ever move
/// forward, which is what makes the fallback policy auditable: a block that
/// never reaches `AwaitAnswerHeader` has no answer-key marker, a block that
/// never reaches `InRationale` has no usable correct answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ParseState {
    AwaitDelimiter,
    InQuestionPart,
    InChoices,
    AwaitAnswerHeader,
    InRationale,
    InDifficulty,
    Done,
}

struct BlockMachine {
    state: ParseState,
    block_id: Option<String>,
    question_lines: Vec<String>,
    choices: Vec<String>,
    open_choice: Option<String>,
    answer_header_seen: bool,
    answer_lines: Vec<String>,
    rationale_lines: Vec<String>,
    difficulty_header_seen: bool,
    difficulty: Option<Difficulty>,
}

impl BlockMachine {
    fn new() -> Self {
        BlockMachine {
            state: ParseState::AwaitDelimiter,
            block_id: None,
            question_lines: Vec::new(),
            choices: Vec::new(),
            open_choice: None,
            answer_header_seen: false,
            answer_lines: Vec::new(),
            rationale_lines: Vec::new(),
            difficulty_header_seen: false,
            difficulty: None,
        }
    }

    fn run(&mut self, block: &str) {
        for line in block.lines() {
            // A transition may hand the current line to the next state.
            while !self.feed(line) {}
        }
    }

    /// Processes one line in the current state. Returns false when the line
    /// must be re-dispatched after a state change.
    fn feed(&mut self, line: &str) -> bool {
        match self.state {
            ParseState::AwaitDelimiter => {
                self.state = ParseState::InQuestionPart;
                if let Some(caps) = ID_LINE.captures(line) {
                    self.block_id = Some(caps[1].to_string());
                    true
                } else {
                    false
                }
            }
            ParseState::InQuestionPart => {
                if let Some(m) = ANSWER_MARKER.find(line) {
                    let prefix = line[..m.start()].trim_end();
                    if !prefix.is_empty() {
                        self.question_lines.push(prefix.to_string());
                    }
                    self.state = ParseState::AwaitAnswerHeader;
                    true
                } else if CHOICE_MARKER.is_match(line) {
                    self.state = ParseState::InChoices;
                    false
                } else {
                    self.question_lines.push(line.to_string());
                    true
                }
            }
            ParseState::InChoices => {
                if let Some(m) = ANSWER_MARKER.find(line) {
                    let prefix = line[..m.start()].trim_end();
                    if !prefix.is_empty() {
                        self.extend_open_choice(prefix);
                    }
                    self.close_open_choice();
                    self.state = ParseState::AwaitAnswerHeader;
                    true
                } else if let Some(caps) = CHOICE_MARKER.captures(line) {
                    self.close_open_choice();
                    let body = caps.get(2).map_or("", |m| m.as_str());
                    self.open_choice = Some(body.to_string());
                    true
                } else {
                    self.extend_open_choice(line);
                    true
                }
            }
            ParseState::AwaitAnswerHeader => {
                if let Some(prefix) = line.strip_suffix(RATIONALE_HEADER) {
                    let prefix = prefix.trim_end();
                    if self.answer_header_seen && !prefix.is_empty() {
                        self.answer_lines.push(prefix.to_string());
                    }
                    self.state = ParseState::InRationale;
                } else if let Some(idx) = line.find(CORRECT_ANSWER_HEADER) {
                    self.answer_header_seen = true;
                    let rest = line[idx + CORRECT_ANSWER_HEADER.len()..].trim();
                    if !rest.is_empty() {
                        self.answer_lines.push(rest.to_string());
                    }
                } else if self.answer_header_seen {
                    self.answer_lines.push(line.to_string());
                }
                true
            }
            ParseState::InRationale => {
                if let Some(idx) = line.find(DIFFICULTY_HEADER) {
                    let prefix = line[..idx].trim_end();
                    if !prefix.is_empty() {
                        self.rationale_lines.push(prefix.to_string());
                    }
                    self.difficulty_header_seen = true;
                    self.state = ParseState::InDifficulty;
                    self.take_difficulty(line[idx + DIFFICULTY_HEADER.len()..].trim());
                } else if line.trim() == BOILERPLATE_MARKER {
                    self.state = ParseState::InDifficulty;
                } else {
                    self.rationale_lines.push(line.to_string());
                }
                true
            }
            ParseState::InDifficulty => {
                if self.difficulty_header_seen {
                    // The label must follow the header directly; anything
                    // else falls back to the medium default.
                    self.take_difficulty(line.trim());
                    self.state = ParseState::Done;
                } else if let Some(idx) = line.find(DIFFICULTY_HEADER) {
                    self.difficulty_header_seen = true;
                    self.take_difficulty(line[idx + DIFFICULTY_HEADER.len()..].trim());
                }
                true
            }
            ParseState::Done => true,
        }
    }

    fn take_difficulty(&mut self, candidate: &str) {
        if DIFFICULTY_LABEL.is_match(candidate) {
            self.difficulty = Some(Difficulty::from_label(candidate));
            self.state = ParseState::Done;
        }
    }

    fn extend_open_choice(&mut self, line: &str) {
        match &mut self.open_choice {
            Some(body) => {
                body.push('\n');
                body.push_str(line);
            }
            None => self.open_choice = Some(line.to_string()),
        }
    }

    fn close_open_choice(&mut self) {
        if let Some(body) = self.open_choice.take() {
            let body = body.trim();
            if body.is_empty() {
                self.choices.push(MISSING_CONTENT_PLACEHOLDER.to_string());
            } else {
                self.choices.push(body.to_string());
            }
        }
    }

    fn discard(&self, reason: DiscardReason) -> BlockDiscard {
        BlockDiscard {
            block_id: self.block_id.clone(),
            reason,
        }
    }

    fn finish(mut self, section: Section) -> Result<ParsedQuestion, BlockDiscard> {
        if matches!(
            self.state,
            ParseState::AwaitDelimiter | ParseState::InQuestionPart | ParseState::InChoices
        ) {
            return Err(self.discard(DiscardReason::MissingAnswerMarker));
        }
        self.close_open_choice();

        let region = self.question_lines.join("\n");
        let (passage, question_text) = if self.choices.is_empty() {
            (String::new(), region.trim().to_string())
        } else {
            fields::split_passage_and_prompt(&region)
        };

        // An answer capture that never reached the rationale header is not
        // trusted; the block reads as having no correct answer.
        let correct_answer = if self.state == ParseState::AwaitAnswerHeader {
            String::new()
        } else {
            self.answer_lines.join("\n").trim().to_string()
        };

        if question_text.is_empty() {
            return Err(self.discard(DiscardReason::MissingText));
        }
        if correct_answer.is_empty() {
            return Err(self.discard(DiscardReason::MissingAnswer));
        }

        let mut explanation = self.rationale_lines.join("\n").trim().to_string();
        if explanation.is_empty() {
            explanation = DEFAULT_EXPLANATION.to_string();
        }

        let difficulty = self.difficulty.unwrap_or_default();

        Ok(ParsedQuestion {
            section,
            question_text,
            passage,
            choices: self.choices,
            correct_answer,
            explanation,
            difficulty,
            points: difficulty.points(),
        })
    }
}

/// Parses one raw block into a structured question, or rejects it with a
/// diagnostic reason. Pure: identical input always yields identical output.
pub fn parse_block(block: &str, section: Section) -> Result<ParsedQuestion, BlockDiscard> {
    let mut machine = BlockMachine::new();
    machine.run(block);
    machine.finish(section)
}
