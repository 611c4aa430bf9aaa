use std::collections::HashSet;

use super::domain::{Dimension, Question, QuestionId, QuestionOption, Weights};

const MIN_OPTIONS: usize = 3;
const MAX_OPTIONS: usize = 4;

/// Fixed, ordered battery of questions. Immutable once built.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validates and orders the supplied questions.
    pub fn new(mut questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(BankError::DuplicateId(question.id));
            }

            let count = question.options.len();
            if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
                return Err(BankError::OptionCount {
                    question: question.id,
                    count,
                });
            }

            let expected = question.dimension.axis();
            for (index, option) in question.options.iter().enumerate() {
                if option
                    .weights
                    .weighted_axes()
                    .iter()
                    .any(|axis| *axis != expected)
                {
                    return Err(BankError::CrossAxisWeight {
                        question: question.id,
                        option: index,
                    });
                }
            }
        }

        questions.sort_by_key(|question| question.order);
        Ok(Self { questions })
    }

    /// The standard fifteen-question battery, five questions per dimension.
    pub fn standard() -> Result<Self, BankError> {
        Self::new(standard_questions())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn for_dimension(&self, dimension: Dimension) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.dimension == dimension)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,
    #[error("question id {0} appears more than once")]
    DuplicateId(QuestionId),
    #[error("question {question} has {count} options; expected 3 to 4")]
    OptionCount { question: QuestionId, count: usize },
    #[error("option {option} of question {question} weights an axis its dimension does not measure")]
    CrossAxisWeight { question: QuestionId, option: usize },
}

fn question(id: u32, dimension: Dimension, text: &str, options: &[(&str, Weights)]) -> Question {
    Question {
        id: QuestionId(id),
        text: text.to_string(),
        dimension,
        options: options
            .iter()
            .map(|(text, weights)| QuestionOption {
                text: (*text).to_string(),
                weights: *weights,
            })
            .collect(),
        order: id,
    }
}

fn standard_questions() -> Vec<Question> {
    use Dimension::{A, F, H};
    let h = Weights::hormone;
    let a = Weights::action;
    let f = Weights::focus;

    vec![
        question(
            1,
            H,
            "When a conflict breaks out, what is your first reaction?",
            &[
                ("Try to understand how the other person feels", h(0, 3)),
                ("Analyse the problem logically", h(3, 0)),
                ("Look for a compromise", h(1, 2)),
                ("State my position clearly", h(2, 0)),
            ],
        ),
        question(
            2,
            H,
            "What matters most when you start a new project?",
            &[
                ("Harmony and cooperation within the team", h(0, 3)),
                ("Clear goals and measurable results", h(3, 0)),
                ("Learning and growing along the way", h(1, 2)),
                ("Beating the competition", h(2, 0)),
            ],
        ),
        question(
            3,
            H,
            "How do you measure success?",
            &[
                ("Good relationships with the people around me", h(0, 3)),
                ("Reaching targets and delivering results", h(3, 0)),
                ("Personal satisfaction and happiness", h(1, 2)),
                ("Staying ahead of rivals", h(2, 0)),
            ],
        ),
        question(
            4,
            H,
            "Which value matters most to you in life?",
            &[
                ("Love and human connection", h(0, 3)),
                ("Achievement and success", h(3, 0)),
                ("Freedom and creativity", h(1, 2)),
                ("Challenge and adventure", h(2, 0)),
            ],
        ),
        question(
            5,
            H,
            "A friend opens up about a problem. What do you do?",
            &[
                ("Empathise and offer emotional support", h(0, 3)),
                ("Propose a concrete solution", h(3, 0)),
                ("Share a similar experience to comfort them", h(1, 2)),
                ("Give realistic, practical advice", h(2, 1)),
            ],
        ),
        question(
            6,
            A,
            "You disagree with your manager during a meeting. You...",
            &[
                ("Say so on the spot", a(3, 0)),
                ("Bring it up privately afterwards", a(0, 3)),
                ("Hint at it by asking a pointed question", a(1, 2)),
                ("Lay out my counter-proposal with data", a(2, 1)),
            ],
        ),
        question(
            7,
            A,
            "How do you turn down a request you do not want to take on?",
            &[
                ("Say no plainly and give the reason", a(3, 0)),
                ("Find a polite excuse", a(0, 3)),
                ("Postpone the answer until it goes away", a(0, 2)),
            ],
        ),
        question(
            8,
            A,
            "When you are drawn to someone, you...",
            &[
                ("Tell them directly", a(3, 0)),
                ("Send subtle signals and wait", a(0, 3)),
                ("Ask a mutual friend to sound them out", a(1, 2)),
                ("Suggest meeting up without much hesitation", a(2, 1)),
            ],
        ),
        question(
            9,
            A,
            "A colleague's work falls short. How do you give feedback?",
            &[
                ("Point out exactly what needs fixing", a(3, 0)),
                ("Suggest improvements indirectly", a(0, 3)),
                ("Open with praise, then mention the issues", a(1, 2)),
            ],
        ),
        question(
            10,
            A,
            "How do you react in a risky situation?",
            &[
                ("Act immediately to resolve it", a(3, 0)),
                ("Size up the situation carefully before moving", a(0, 3)),
                ("Treat it as a challenge and take charge", a(2, 0)),
                ("Quietly ask someone for help", a(0, 2)),
            ],
        ),
        question(
            11,
            F,
            "How do you usually spend your free time?",
            &[
                ("On my own hobbies, by myself", f(3, 0)),
                ("With friends or family", f(0, 3)),
                ("Learning a new skill", f(2, 1)),
                ("Team sports or group activities", f(1, 2)),
            ],
        ),
        question(
            12,
            F,
            "How do you settle into a new environment?",
            &[
                ("Work out the rules and systems on my own", f(3, 0)),
                ("Build relationships with people first", f(0, 3)),
                ("Observe quietly and adapt at my own pace", f(2, 0)),
                ("Join group events to get to know everyone", f(0, 2)),
            ],
        ),
        question(
            13,
            F,
            "What weighs most when you make a decision?",
            &[
                ("My own standards and goals", f(3, 0)),
                ("How it will affect the people around me", f(0, 3)),
                ("Gut feeling", f(2, 1)),
                ("What my close friends would think", f(1, 2)),
            ],
        ),
        question(
            14,
            F,
            "What role do you take in a team?",
            &[
                ("Independent specialist who owns a piece of the work", f(3, 0)),
                ("Mediator who keeps everyone aligned", f(0, 3)),
                ("Idea generator", f(2, 1)),
                ("Motivator who lifts team spirit", f(1, 2)),
            ],
        ),
        question(
            15,
            F,
            "What kind of goals do you set?",
            &[
                ("Personal growth goals", f(3, 0)),
                ("Goals I can reach together with others", f(0, 3)),
                ("Ambitious targets for the whole group", f(1, 2)),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::domain::Axis;

    fn standard() -> QuestionBank {
        QuestionBank::standard().expect("standard bank valid")
    }

    #[test]
    fn standard_bank_has_fifteen_questions() {
        assert_eq!(standard().len(), 15);
    }

    #[test]
    fn standard_bank_covers_each_dimension_evenly() {
        let bank = standard();
        for dimension in [Dimension::H, Dimension::A, Dimension::F] {
            assert_eq!(bank.for_dimension(dimension).len(), 5);
        }
        let orders: Vec<u32> = bank.questions().iter().map(|q| q.order).collect();
        assert_eq!(orders, (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn every_axis_pole_is_reachable() {
        let bank = standard();
        for axis in Axis::ordered() {
            let (first, second) = bank
                .questions()
                .iter()
                .flat_map(|q| q.options.iter())
                .map(|option| option.weights.axis(axis))
                .fold((0, 0), |acc, (a, b)| (acc.0 + a, acc.1 + b));
            assert!(first > 0 && second > 0, "{axis:?} poles both weighted");
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut questions = standard().questions().to_vec();
        questions[1].id = questions[0].id;
        assert_eq!(
            QuestionBank::new(questions).unwrap_err(),
            BankError::DuplicateId(QuestionId(1))
        );
    }

    #[test]
    fn rejects_questions_with_too_few_options() {
        let mut questions = standard().questions().to_vec();
        questions[0].options.truncate(2);
        assert!(matches!(
            QuestionBank::new(questions),
            Err(BankError::OptionCount { count: 2, .. })
        ));
    }

    #[test]
    fn rejects_options_weighting_another_axis() {
        let mut questions = standard().questions().to_vec();
        questions[0].options[0].weights.d = 1;
        assert_eq!(
            QuestionBank::new(questions).unwrap_err(),
            BankError::CrossAxisWeight {
                question: QuestionId(1),
                option: 0
            }
        );
    }

    #[test]
    fn sorts_questions_by_display_order() {
        let mut questions = standard().questions().to_vec();
        questions.reverse();
        let bank = QuestionBank::new(questions).expect("valid");
        assert_eq!(bank.questions()[0].id, QuestionId(1));
    }
}
