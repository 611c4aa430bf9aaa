use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;
use std::str::FromStr;

/// One end of a personality axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pole {
    #[serde(rename = "T")]
    Testosterone,
    #[serde(rename = "E")]
    Estrogen,
    #[serde(rename = "D")]
    Direct,
    #[serde(rename = "S")]
    Subtle,
    #[serde(rename = "I")]
    Individual,
    #[serde(rename = "R")]
    Relational,
}

impl Pole {
    pub const fn letter(self) -> char {
        match self {
            Self::Testosterone => 'T',
            Self::Estrogen => 'E',
            Self::Direct => 'D',
            Self::Subtle => 'S',
            Self::Individual => 'I',
            Self::Relational => 'R',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Testosterone => "Testosterone",
            Self::Estrogen => "Estrogen",
            Self::Direct => "Direct",
            Self::Subtle => "Subtle",
            Self::Individual => "Individual",
            Self::Relational => "Relational",
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Self::Testosterone | Self::Estrogen => Axis::Hormone,
            Self::Direct | Self::Subtle => Axis::Action,
            Self::Individual | Self::Relational => Axis::Focus,
        }
    }
}

/// Independent binary dimension of the personality model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Hormone,
    Action,
    Focus,
}

impl Axis {
    pub const fn ordered() -> [Self; 3] {
        [Self::Hormone, Self::Action, Self::Focus]
    }

    /// First-named pole, then second-named pole.
    pub const fn poles(self) -> (Pole, Pole) {
        match self {
            Self::Hormone => (Pole::Testosterone, Pole::Estrogen),
            Self::Action => (Pole::Direct, Pole::Subtle),
            Self::Focus => (Pole::Individual, Pole::Relational),
        }
    }

    pub const fn dimension(self) -> Dimension {
        match self {
            Self::Hormone => Dimension::H,
            Self::Action => Dimension::A,
            Self::Focus => Dimension::F,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hormone => "Hormone Tendency",
            Self::Action => "Action Style",
            Self::Focus => "Focus of Attention",
        }
    }
}

/// Dimension tag carried by each question (`H`, `A` or `F`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    H,
    A,
    F,
}

impl Dimension {
    pub const fn axis(self) -> Axis {
        match self {
            Self::H => Axis::Hormone,
            Self::A => Axis::Action,
            Self::F => Axis::Focus,
        }
    }
}

/// Per-pole weights attached to a single answer option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    #[serde(rename = "T", default)]
    pub t: u32,
    #[serde(rename = "E", default)]
    pub e: u32,
    #[serde(rename = "D", default)]
    pub d: u32,
    #[serde(rename = "S", default)]
    pub s: u32,
    #[serde(rename = "I", default)]
    pub i: u32,
    #[serde(rename = "R", default)]
    pub r: u32,
}

impl Weights {
    pub const fn hormone(t: u32, e: u32) -> Self {
        Self {
            t,
            e,
            d: 0,
            s: 0,
            i: 0,
            r: 0,
        }
    }

    pub const fn action(d: u32, s: u32) -> Self {
        Self {
            t: 0,
            e: 0,
            d,
            s,
            i: 0,
            r: 0,
        }
    }

    pub const fn focus(i: u32, r: u32) -> Self {
        Self {
            t: 0,
            e: 0,
            d: 0,
            s: 0,
            i,
            r,
        }
    }

    pub const fn pole(&self, pole: Pole) -> u32 {
        match pole {
            Pole::Testosterone => self.t,
            Pole::Estrogen => self.e,
            Pole::Direct => self.d,
            Pole::Subtle => self.s,
            Pole::Individual => self.i,
            Pole::Relational => self.r,
        }
    }

    pub const fn axis(&self, axis: Axis) -> (u32, u32) {
        let (first, second) = axis.poles();
        (self.pole(first), self.pole(second))
    }

    /// Axes that receive a non-zero weight.
    pub fn weighted_axes(&self) -> Vec<Axis> {
        Axis::ordered()
            .into_iter()
            .filter(|axis| {
                let (first, second) = self.axis(*axis);
                first + second > 0
            })
            .collect()
    }
}

/// Stable identifier of a question within the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub text: String,
    pub weights: Weights,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub dimension: Dimension,
    pub options: Vec<QuestionOption>,
    pub order: u32,
}

impl Question {
    pub fn option(&self, index: usize) -> Option<&QuestionOption> {
        self.options.get(index)
    }
}

/// A respondent's choice for one question.
///
/// The index is signed so that a negative value from the client reaches the
/// aggregator and is skipped there instead of failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: QuestionId,
    pub option_index: i64,
}

impl Answer {
    pub const fn new(question_id: u32, option_index: i64) -> Self {
        Self {
            question_id: QuestionId(question_id),
            option_index,
        }
    }

    /// Answer pointing at a known option position.
    pub fn for_slot(question_id: QuestionId, slot: usize) -> Self {
        Self {
            question_id,
            option_index: i64::try_from(slot).unwrap_or(i64::MAX),
        }
    }

    /// Position in the option list, `None` when the index is negative.
    pub fn option_slot(&self) -> Option<usize> {
        usize::try_from(self.option_index).ok()
    }
}

/// Six accumulated pole totals before classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScores {
    #[serde(rename = "T")]
    pub t: u32,
    #[serde(rename = "E")]
    pub e: u32,
    #[serde(rename = "D")]
    pub d: u32,
    #[serde(rename = "S")]
    pub s: u32,
    #[serde(rename = "I")]
    pub i: u32,
    #[serde(rename = "R")]
    pub r: u32,
}

impl RawScores {
    pub const fn pole(&self, pole: Pole) -> u32 {
        match pole {
            Pole::Testosterone => self.t,
            Pole::Estrogen => self.e,
            Pole::Direct => self.d,
            Pole::Subtle => self.s,
            Pole::Individual => self.i,
            Pole::Relational => self.r,
        }
    }

    pub const fn axis(&self, axis: Axis) -> (u32, u32) {
        let (first, second) = axis.poles();
        (self.pole(first), self.pole(second))
    }
}

impl AddAssign<&Weights> for RawScores {
    fn add_assign(&mut self, weights: &Weights) {
        self.t += weights.t;
        self.e += weights.e;
        self.d += weights.d;
        self.s += weights.s;
        self.i += weights.i;
        self.r += weights.r;
    }
}

/// The eight three-letter personality archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PersonalityType {
    Tdi,
    Tdr,
    Tsi,
    Tsr,
    Edi,
    Edr,
    Esi,
    Esr,
}

impl PersonalityType {
    pub const COUNT: usize = 8;

    pub const fn all() -> [Self; Self::COUNT] {
        [
            Self::Tdi,
            Self::Tdr,
            Self::Tsi,
            Self::Tsr,
            Self::Edi,
            Self::Edr,
            Self::Esi,
            Self::Esr,
        ]
    }

    /// Position in [`PersonalityType::all`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Tdi => "TDI",
            Self::Tdr => "TDR",
            Self::Tsi => "TSI",
            Self::Tsr => "TSR",
            Self::Edi => "EDI",
            Self::Edr => "EDR",
            Self::Esi => "ESI",
            Self::Esr => "ESR",
        }
    }

    /// Builds a type from one pole per axis. Returns `None` when a pole sits
    /// on the wrong axis.
    pub fn from_poles(hormone: Pole, action: Pole, focus: Pole) -> Option<Self> {
        let ty = match (hormone, action, focus) {
            (Pole::Testosterone, Pole::Direct, Pole::Individual) => Self::Tdi,
            (Pole::Testosterone, Pole::Direct, Pole::Relational) => Self::Tdr,
            (Pole::Testosterone, Pole::Subtle, Pole::Individual) => Self::Tsi,
            (Pole::Testosterone, Pole::Subtle, Pole::Relational) => Self::Tsr,
            (Pole::Estrogen, Pole::Direct, Pole::Individual) => Self::Edi,
            (Pole::Estrogen, Pole::Direct, Pole::Relational) => Self::Edr,
            (Pole::Estrogen, Pole::Subtle, Pole::Individual) => Self::Esi,
            (Pole::Estrogen, Pole::Subtle, Pole::Relational) => Self::Esr,
            _ => return None,
        };
        Some(ty)
    }

    /// Builds a type from which axes were won by their first-named pole.
    pub const fn from_first_poles(hormone: bool, action: bool, focus: bool) -> Self {
        match (hormone, action, focus) {
            (true, true, true) => Self::Tdi,
            (true, true, false) => Self::Tdr,
            (true, false, true) => Self::Tsi,
            (true, false, false) => Self::Tsr,
            (false, true, true) => Self::Edi,
            (false, true, false) => Self::Edr,
            (false, false, true) => Self::Esi,
            (false, false, false) => Self::Esr,
        }
    }

    pub const fn poles(self) -> [Pole; 3] {
        match self {
            Self::Tdi => [Pole::Testosterone, Pole::Direct, Pole::Individual],
            Self::Tdr => [Pole::Testosterone, Pole::Direct, Pole::Relational],
            Self::Tsi => [Pole::Testosterone, Pole::Subtle, Pole::Individual],
            Self::Tsr => [Pole::Testosterone, Pole::Subtle, Pole::Relational],
            Self::Edi => [Pole::Estrogen, Pole::Direct, Pole::Individual],
            Self::Edr => [Pole::Estrogen, Pole::Direct, Pole::Relational],
            Self::Esi => [Pole::Estrogen, Pole::Subtle, Pole::Individual],
            Self::Esr => [Pole::Estrogen, Pole::Subtle, Pole::Relational],
        }
    }

    pub const fn hormone(self) -> Pole {
        self.poles()[0]
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown personality type code '{0}'")]
pub struct ParseTypeError(pub String);

impl FromStr for PersonalityType {
    type Err = ParseTypeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let code = raw.trim().to_ascii_uppercase();
        Self::all()
            .into_iter()
            .find(|ty| ty.code() == code)
            .ok_or_else(|| ParseTypeError(raw.to_string()))
    }
}

impl Serialize for PersonalityType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for PersonalityType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Client-generated identifier for one quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payload accepted from the submission intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub session_id: SessionId,
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub gender: Option<Gender>,
}

/// Optional respondent metadata used only for result titles.
///
/// Any value other than `male` or `female` deserializes to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[serde(other)]
    Other,
}

impl Gender {
    /// Title suffix; `Other` carries none.
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::Male => Some("Man"),
            Self::Female => Some("Woman"),
            Self::Other => None,
        }
    }
}
