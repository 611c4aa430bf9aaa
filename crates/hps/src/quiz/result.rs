use serde::Serialize;

use super::catalog::{Compatibility, TypeProfile};
use super::classifier::{Classification, Percentages};
use super::domain::{Axis, Gender, PersonalityType, Pole, RawScores};

/// Per-axis view exposing both pole shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisView {
    pub axis: Axis,
    pub label: &'static str,
    pub pole: Pole,
    pub first_pole: Pole,
    pub second_pole: Pole,
    pub first_share: u8,
    pub second_share: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Characteristics {
    pub strengths: Vec<&'static str>,
    pub growth_tips: Vec<&'static str>,
    pub careers: Vec<&'static str>,
    pub notable_examples: Vec<&'static str>,
}

/// Final result handed to callers. Built once per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    #[serde(rename = "type")]
    pub personality_type: PersonalityType,
    pub name: &'static str,
    pub title: String,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub scores: RawScores,
    pub percentages: Percentages,
    pub axes: Vec<AxisView>,
    pub characteristics: Characteristics,
    pub compatibility: Compatibility,
}

/// Composes classifier output and catalog content. No scoring happens here.
pub fn assemble(
    scores: RawScores,
    classification: &Classification,
    profile: &TypeProfile,
    gender: Option<Gender>,
) -> QuizResult {
    let percentages = classification.percentages();
    let axes = classification
        .axes
        .iter()
        .map(|outcome| {
            let (first_pole, second_pole) = outcome.axis.poles();
            AxisView {
                axis: outcome.axis,
                label: outcome.axis.label(),
                pole: outcome.pole,
                first_pole,
                second_pole,
                first_share: percentages.get(outcome.axis),
                second_share: percentages.complement(outcome.axis),
            }
        })
        .collect();

    QuizResult {
        personality_type: classification.personality_type,
        name: profile.name,
        title: title(profile.name, classification.personality_type, gender),
        description: profile.description,
        icon: profile.icon,
        color: profile.color,
        gender,
        scores,
        percentages,
        axes,
        characteristics: Characteristics {
            strengths: profile.strengths.clone(),
            growth_tips: profile.weaknesses.clone(),
            careers: profile.careers.clone(),
            notable_examples: profile.notable_examples.clone(),
        },
        compatibility: profile.compatibility.clone(),
    }
}

fn title(name: &str, personality_type: PersonalityType, gender: Option<Gender>) -> String {
    let hormone = match personality_type.hormone() {
        Pole::Testosterone => "Teto",
        _ => "Egen",
    };
    match gender.and_then(Gender::label) {
        Some(label) => format!("{name} ({hormone} {label})"),
        None => format!("{name} ({hormone})"),
    }
}
