use super::{Compatibility, TypeProfile};
use crate::quiz::domain::PersonalityType::{self, Edi, Edr, Esi, Esr, Tdi, Tdr, Tsi, Tsr};

fn compatibility(
    perfect: &[PersonalityType],
    good: &[PersonalityType],
    growth: &[PersonalityType],
) -> Compatibility {
    Compatibility {
        perfect: perfect.to_vec(),
        good: good.to_vec(),
        growth: growth.to_vec(),
    }
}

pub(super) fn standard_profiles() -> Vec<TypeProfile> {
    vec![
        TypeProfile {
            personality_type: Tdi,
            name: "Steel Leader",
            description: "Goal-driven and outspoken, you set the direction and expect results. You trust your own judgement, move quickly, and are at your best when a hard target is on the line.",
            icon: "crown",
            color: "bg-gradient-to-br from-red-500 to-orange-500",
            strengths: vec!["Decisiveness", "Strategic drive", "Composure under pressure", "Clear communication"],
            weaknesses: vec![
                "Slow down to hear quieter voices before deciding.",
                "Share credit openly; it multiplies loyalty.",
            ],
            careers: vec!["Founder or CEO", "Management consultant", "Trial lawyer", "Product lead"],
            notable_examples: vec!["Start-up founders", "Championship team captains"],
            compatibility: compatibility(&[Esr], &[Edr, Tsr], &[Tdr, Esi]),
        },
        TypeProfile {
            personality_type: Tdr,
            name: "Passionate Inspirer",
            description: "Energetic and direct, you rally people around a shared goal. Competition fires you up, but you want to win together rather than alone.",
            icon: "flame",
            color: "bg-gradient-to-br from-orange-500 to-amber-500",
            strengths: vec!["Motivating others", "Enthusiasm", "Persuasion", "Team building"],
            weaknesses: vec![
                "Pace yourself; not everyone runs at your speed.",
                "Follow through on details after the kickoff energy fades.",
            ],
            careers: vec!["Sales director", "Coach", "Event producer", "Community organiser"],
            notable_examples: vec!["Sports coaches", "Campaign leaders"],
            compatibility: compatibility(&[Esi], &[Edi, Tsi], &[Tdi, Esr]),
        },
        TypeProfile {
            personality_type: Tsi,
            name: "Cool Lone Wolf",
            description: "Analytical and self-contained, you prefer to observe before acting and to work on your own terms. You are calm in a crisis and quietly relentless about quality.",
            icon: "moon",
            color: "bg-gradient-to-br from-slate-500 to-gray-700",
            strengths: vec!["Independent problem solving", "Objectivity", "Focus", "Calm under stress"],
            weaknesses: vec![
                "Let people in on your reasoning; silence can read as distance.",
                "Ask for help before a problem becomes urgent.",
            ],
            careers: vec!["Software engineer", "Data scientist", "Researcher", "Investigative journalist"],
            notable_examples: vec!["Solo inventors", "Chess grandmasters"],
            compatibility: compatibility(&[Edr], &[Esr, Tdr], &[Tsr, Edi]),
        },
        TypeProfile {
            personality_type: Tsr,
            name: "Steady Pillar",
            description: "Dependable and pragmatic, you get things done without fuss and look after the people who rely on you. You lead by example rather than by announcement.",
            icon: "shield",
            color: "bg-gradient-to-br from-blue-500 to-indigo-600",
            strengths: vec!["Reliability", "Practical judgement", "Loyalty", "Patience"],
            weaknesses: vec![
                "Speak up for your own needs, not just the team's.",
                "Try new approaches even when the old one still works.",
            ],
            careers: vec!["Operations manager", "Civil engineer", "Paramedic", "Project manager"],
            notable_examples: vec!["Team veterans", "Emergency responders"],
            compatibility: compatibility(&[Edi], &[Esi, Tdi], &[Tsi, Edr]),
        },
        TypeProfile {
            personality_type: Edi,
            name: "Confident Free Spirit",
            description: "Expressive and independent, you follow your own taste and say what you feel. You combine warmth with a strong sense of self and little patience for convention.",
            icon: "sparkles",
            color: "bg-gradient-to-br from-purple-500 to-fuchsia-500",
            strengths: vec!["Self-expression", "Creativity", "Authenticity", "Emotional honesty"],
            weaknesses: vec![
                "Commit to a plan long enough to see it pay off.",
                "Check how your candour lands with others.",
            ],
            careers: vec!["Designer", "Content creator", "Entrepreneur", "Performer"],
            notable_examples: vec!["Independent artists", "Fashion designers"],
            compatibility: compatibility(&[Tsr], &[Tsi, Edr], &[Tdi, Esi]),
        },
        TypeProfile {
            personality_type: Edr,
            name: "Warm Leader",
            description: "Caring and straightforward, you build teams where people feel heard and still get things done. You address problems openly because you care about the outcome for everyone.",
            icon: "heart-handshake",
            color: "bg-gradient-to-br from-pink-500 to-rose-500",
            strengths: vec!["Empathetic leadership", "Open communication", "Conflict resolution", "Mentoring"],
            weaknesses: vec![
                "Accept that some decisions will disappoint someone.",
                "Protect time for your own priorities.",
            ],
            careers: vec!["HR director", "Teacher", "Nonprofit leader", "Healthcare manager"],
            notable_examples: vec!["School principals", "Community leaders"],
            compatibility: compatibility(&[Tsi], &[Tsr, Edi], &[Tdr, Esr]),
        },
        TypeProfile {
            personality_type: Esi,
            name: "Mysterious Dreamer",
            description: "Imaginative and introspective, you live a rich inner life and notice what others miss. You express yourself through ideas and craft more readily than through words.",
            icon: "cloud-moon",
            color: "bg-gradient-to-br from-indigo-500 to-violet-600",
            strengths: vec!["Imagination", "Intuition", "Depth of thought", "Aesthetic sense"],
            weaknesses: vec![
                "Turn ideas into small concrete steps.",
                "Share your work before it feels finished.",
            ],
            careers: vec!["Writer", "Illustrator", "Composer", "UX researcher"],
            notable_examples: vec!["Novelists", "Film directors"],
            compatibility: compatibility(&[Tdr], &[Tdi, Esr], &[Tsi, Edi]),
        },
        TypeProfile {
            personality_type: Esr,
            name: "Pure Healer",
            description: "Gentle and attentive, you make people feel safe and understood. You prefer harmony to confrontation and put the well-being of others first.",
            icon: "leaf",
            color: "bg-gradient-to-br from-green-500 to-teal-500",
            strengths: vec!["Empathy", "Active listening", "Patience", "Supportiveness"],
            weaknesses: vec![
                "Set boundaries so helping others does not drain you.",
                "Voice disagreement early instead of absorbing it.",
            ],
            careers: vec!["Counsellor", "Nurse", "Social worker", "Early-childhood educator"],
            notable_examples: vec!["Therapists", "Volunteer caregivers"],
            compatibility: compatibility(&[Tdi], &[Tdr, Esi], &[Tsr, Edr]),
        },
    ]
}
