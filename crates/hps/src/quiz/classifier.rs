use serde::{Deserialize, Serialize};

use super::domain::{Axis, PersonalityType, Pole, RawScores};

/// Percentage reported when an axis received no weight at all.
pub const NEUTRAL_PERCENTAGE: u8 = 50;

/// First-pole share of each axis, 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percentages {
    pub hormone: u8,
    pub action: u8,
    pub focus: u8,
}

impl Percentages {
    pub const fn get(&self, axis: Axis) -> u8 {
        match axis {
            Axis::Hormone => self.hormone,
            Axis::Action => self.action,
            Axis::Focus => self.focus,
        }
    }

    /// Second-pole share, derived by subtraction so the pair sums to 100.
    pub const fn complement(&self, axis: Axis) -> u8 {
        100 - self.get(axis)
    }
}

/// Resolution of a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisOutcome {
    pub axis: Axis,
    pub pole: Pole,
    pub first: u32,
    pub second: u32,
    pub percentage: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub personality_type: PersonalityType,
    pub axes: [AxisOutcome; 3],
}

impl Classification {
    pub fn percentages(&self) -> Percentages {
        let [hormone, action, focus] = self.axes;
        Percentages {
            hormone: hormone.percentage,
            action: action.percentage,
            focus: focus.percentage,
        }
    }

    pub fn axis(&self, axis: Axis) -> &AxisOutcome {
        match axis {
            Axis::Hormone => &self.axes[0],
            Axis::Action => &self.axes[1],
            Axis::Focus => &self.axes[2],
        }
    }
}

/// Reduces a raw vector to one of the eight types.
///
/// The first-named pole of an axis wins only when it is strictly greater
/// than the second; ties, including 0/0, go to the second pole.
pub fn classify(scores: &RawScores) -> Classification {
    let axes = Axis::ordered().map(|axis| resolve_axis(scores, axis));
    let [hormone, action, focus] = axes.map(|outcome| outcome.pole == outcome.axis.poles().0);
    let personality_type = PersonalityType::from_first_poles(hormone, action, focus);

    Classification {
        personality_type,
        axes,
    }
}

fn resolve_axis(scores: &RawScores, axis: Axis) -> AxisOutcome {
    let (first_pole, second_pole) = axis.poles();
    let (first, second) = scores.axis(axis);
    let pole = if first > second {
        first_pole
    } else {
        second_pole
    };

    AxisOutcome {
        axis,
        pole,
        first,
        second,
        percentage: axis_percentage(first, second),
    }
}

/// `round(100 * first / (first + second))`, half rounded up, 50 on a zero total.
pub fn axis_percentage(first: u32, second: u32) -> u8 {
    let total = u64::from(first) + u64::from(second);
    if total == 0 {
        return NEUTRAL_PERCENTAGE;
    }
    let scaled = (200 * u64::from(first) + total) / (2 * total);
    // first <= total, so scaled <= 100
    scaled as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(t: u32, e: u32, d: u32, s: u32, i: u32, r: u32) -> RawScores {
        RawScores { t, e, d, s, i, r }
    }

    #[test]
    fn zero_vector_classifies_as_esr_with_neutral_percentages() {
        let classification = classify(&RawScores::default());
        assert_eq!(classification.personality_type, PersonalityType::Esr);
        assert_eq!(
            classification.percentages(),
            Percentages {
                hormone: 50,
                action: 50,
                focus: 50
            }
        );
    }

    #[test]
    fn ties_resolve_to_the_second_pole() {
        let classification = classify(&scores(5, 5, 0, 0, 0, 0));
        assert_eq!(classification.personality_type, PersonalityType::Esr);
        assert_eq!(classification.axis(Axis::Hormone).pole, Pole::Estrogen);
        assert_eq!(classification.percentages().hormone, 50);
    }

    #[test]
    fn strict_majority_selects_the_first_pole() {
        let classification = classify(&scores(6, 0, 0, 3, 0, 3));
        assert_eq!(classification.personality_type, PersonalityType::Tsr);
        assert_eq!(
            classification.percentages(),
            Percentages {
                hormone: 100,
                action: 0,
                focus: 0
            }
        );
    }

    #[test]
    fn every_combination_of_majorities_is_reachable() {
        let mut seen = Vec::new();
        for t_wins in [true, false] {
            for d_wins in [true, false] {
                for i_wins in [true, false] {
                    let pick = |wins: bool| if wins { (2, 1) } else { (1, 2) };
                    let (t, e) = pick(t_wins);
                    let (d, s) = pick(d_wins);
                    let (i, r) = pick(i_wins);
                    seen.push(classify(&scores(t, e, d, s, i, r)).personality_type);
                }
            }
        }
        assert_eq!(seen, PersonalityType::all().to_vec());
    }

    #[test]
    fn percentages_round_half_up() {
        assert_eq!(axis_percentage(1, 1), 50);
        assert_eq!(axis_percentage(1, 2), 33);
        assert_eq!(axis_percentage(2, 1), 67);
        assert_eq!(axis_percentage(1, 7), 13);
        assert_eq!(axis_percentage(1, 199), 1);
        assert_eq!(axis_percentage(1, 200), 0);
        assert_eq!(axis_percentage(0, 0), NEUTRAL_PERCENTAGE);
    }

    #[test]
    fn complements_always_sum_to_one_hundred() {
        for first in 0..20 {
            for second in 0..20 {
                let percentages = classify(&scores(first, second, second, first, first, 0))
                    .percentages();
                for axis in Axis::ordered() {
                    assert_eq!(
                        u16::from(percentages.get(axis)) + u16::from(percentages.complement(axis)),
                        100
                    );
                }
            }
        }
    }
}
