//! Archetype identities and their task template tables.
//!
//! Archetypes are static content: loaded once at startup, never mutated.
//! Each archetype carries an ordered list of task templates; a separate
//! universal set (rituals, deep work) applies regardless of archetype.
//! Narrative metadata (epithet, doctrine, quote) is display-only and
//! never consulted by the schedule generator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Closed set of archetype identifiers.
///
/// Unknown ids are rejected at the parse boundary ([`FromStr`]) -- the
/// generator only ever sees a valid member, so it can never be asked to
/// produce tasks for an archetype that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchetypeId {
    Yujiro,
    Baki,
    Ohma,
    Jack,
}

impl ArchetypeId {
    pub const ALL: [ArchetypeId; 4] = [
        ArchetypeId::Yujiro,
        ArchetypeId::Baki,
        ArchetypeId::Ohma,
        ArchetypeId::Jack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArchetypeId::Yujiro => "yujiro",
            ArchetypeId::Baki => "baki",
            ArchetypeId::Ohma => "ohma",
            ArchetypeId::Jack => "jack",
        }
    }
}

impl fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchetypeId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yujiro" => Ok(ArchetypeId::Yujiro),
            "baki" => Ok(ArchetypeId::Baki),
            "ohma" => Ok(ArchetypeId::Ohma),
            "jack" => Ok(ArchetypeId::Jack),
            other => Err(ValidationError::InvalidValue {
                field: "archetype".to_string(),
                message: format!("unknown archetype id '{other}'"),
            }),
        }
    }
}

/// The category a task trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Vitality,
    Discipline,
    Intellect,
    Spirit,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Vitality => "Vitality",
            Intent::Discipline => "Discipline",
            Intent::Intellect => "Intellect",
            Intent::Spirit => "Spirit",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training locations a user may have access to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingAccess {
    Gym,
    Home,
    Dojo,
}

impl TrainingAccess {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingAccess::Gym => "gym",
            TrainingAccess::Home => "home",
            TrainingAccess::Dojo => "dojo",
        }
    }
}

impl fmt::Display for TrainingAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingAccess {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gym" => Ok(TrainingAccess::Gym),
            "home" => Ok(TrainingAccess::Home),
            "dojo" => Ok(TrainingAccess::Dojo),
            other => Err(ValidationError::InvalidValue {
                field: "training_access".to_string(),
                message: format!("unknown training location '{other}'"),
            }),
        }
    }
}

/// Static archetype descriptor. Display metadata only.
#[derive(Debug, Clone, Serialize)]
pub struct Archetype {
    pub id: ArchetypeId,
    pub name: &'static str,
    pub epithet: &'static str,
    pub description: &'static str,
    pub doctrine: &'static str,
    pub quote: &'static str,
    pub requirements: &'static [&'static str],
}

/// Static definition of a potential task.
///
/// Templates never appear in a schedule directly; the generator stamps
/// out concrete [`crate::schedule::Task`] instances from them.
#[derive(Debug, Clone, Serialize)]
pub struct TaskTemplate {
    pub title: &'static str,
    pub intent: Intent,
    /// Nominal duration in minutes.
    pub duration_min: u32,
    pub xp: u32,
    pub instructions: &'static [&'static str],
    /// Required training locations. Empty means no requirement.
    pub requires: &'static [TrainingAccess],
}

impl TaskTemplate {
    /// A template qualifies when it has no location requirement or the
    /// requirement intersects the user's training access.
    pub fn qualifies(&self, access: &[TrainingAccess]) -> bool {
        self.requires.is_empty() || self.requires.iter().any(|r| access.contains(r))
    }
}

const ARCHETYPES: [Archetype; 4] = [
    Archetype {
        id: ArchetypeId::Yujiro,
        name: "Yujiro Hanma",
        epithet: "The Ogre",
        description: "Absolute dominance. You do not train to participate. \
            You train to rule. Weakness is strictly prohibited.",
        doctrine: "Strength is the only Truth.",
        quote: "Coin flip? If it lands on heads, I win. If it lands on tails, you lose.",
        requirements: &["Daily Max Effort", "Zero Complaints", "Reject Norms"],
    },
    Archetype {
        id: ArchetypeId::Baki,
        name: "Baki Hanma",
        epithet: "The Champion",
        description: "Infinite evolution. The goal is not to be the best, but to be \
            better than you were yesterday. Imagination creates reality.",
        doctrine: "Growth over Victory.",
        quote: "I don't need to be the strongest in the world. \
            I just want to be slightly stronger than my father.",
        requirements: &["High Volume Training", "Visualisation", "Adaptability"],
    },
    Archetype {
        id: ArchetypeId::Ohma,
        name: "Ohma Tokita",
        epithet: "The Ashura",
        description: "Martial precision. Control the flow of power. \
            Balance the fire inside with the water outside.",
        doctrine: "Violence sublimated into Art.",
        quote: "You want to fight? Then bring it on.",
        requirements: &["Technical Mastery", "Flow State", "Deep Recovery"],
    },
    Archetype {
        id: ArchetypeId::Jack,
        name: "Jack Hanma",
        epithet: "The Cyborg",
        description: "Victory at any cost. Sacrifice your tomorrow for strength today. \
            Pain is just a chemical reaction.",
        doctrine: "I would give up my tomorrow.",
        quote: "I never planned to live long. I traded my life for strength.",
        requirements: &["Extreme Agony", "Chemical Assistance", "Self Destruction"],
    },
];

/// All archetypes, in selection order.
pub fn all() -> &'static [Archetype] {
    &ARCHETYPES
}

/// Look up the static descriptor for an id.
pub fn get(id: ArchetypeId) -> &'static Archetype {
    match id {
        ArchetypeId::Yujiro => &ARCHETYPES[0],
        ArchetypeId::Baki => &ARCHETYPES[1],
        ArchetypeId::Ohma => &ARCHETYPES[2],
        ArchetypeId::Jack => &ARCHETYPES[3],
    }
}

const YUJIRO_TASKS: &[TaskTemplate] = &[
    TaskTemplate {
        title: "Primal Strength",
        intent: Intent::Vitality,
        duration_min: 60,
        xp: 60,
        instructions: &["Heavy Compounds", "Max Effort Sets", "No Rest"],
        requires: &[TrainingAccess::Gym],
    },
    TaskTemplate {
        title: "Dominance Training",
        intent: Intent::Vitality,
        duration_min: 45,
        xp: 50,
        instructions: &["Explosive Movements", "Plyometrics", "Power"],
        requires: &[],
    },
    TaskTemplate {
        title: "Mental Conquest",
        intent: Intent::Intellect,
        duration_min: 60,
        xp: 40,
        instructions: &["Strategic Reading", "Problem Solving", "No Weakness"],
        requires: &[],
    },
    TaskTemplate {
        title: "Cold Exposure",
        intent: Intent::Spirit,
        duration_min: 15,
        xp: 30,
        instructions: &["Cold Shower", "Breath Control", "Endure"],
        requires: &[],
    },
];

const BAKI_TASKS: &[TaskTemplate] = &[
    TaskTemplate {
        title: "Shadow Boxing",
        intent: Intent::Vitality,
        duration_min: 30,
        xp: 35,
        instructions: &["Visualize Opponent", "Full Speed", "Imagination"],
        requires: &[],
    },
    TaskTemplate {
        title: "Technical Drilling",
        intent: Intent::Vitality,
        duration_min: 45,
        xp: 45,
        instructions: &["Perfect Form", "Slow to Fast", "Mind-Muscle"],
        requires: &[TrainingAccess::Dojo, TrainingAccess::Home],
    },
    TaskTemplate {
        title: "Strength Circuit",
        intent: Intent::Vitality,
        duration_min: 40,
        xp: 40,
        instructions: &["Compound Lifts", "Supersets", "Volume"],
        requires: &[TrainingAccess::Gym],
    },
    TaskTemplate {
        title: "Recovery Protocol",
        intent: Intent::Spirit,
        duration_min: 30,
        xp: 25,
        instructions: &["Stretch", "Foam Roll", "Breathwork"],
        requires: &[],
    },
    TaskTemplate {
        title: "Skill Development",
        intent: Intent::Intellect,
        duration_min: 45,
        xp: 35,
        instructions: &["Watch Technique Videos", "Take Notes", "Plan Training"],
        requires: &[],
    },
];

const OHMA_TASKS: &[TaskTemplate] = &[
    TaskTemplate {
        title: "Niko Style Kata",
        intent: Intent::Vitality,
        duration_min: 45,
        xp: 45,
        instructions: &["Flowing Movements", "Breath Control", "Precision"],
        requires: &[TrainingAccess::Dojo, TrainingAccess::Home],
    },
    TaskTemplate {
        title: "Conditioning Flow",
        intent: Intent::Vitality,
        duration_min: 30,
        xp: 30,
        instructions: &["Zone 2 Cardio", "Steady State", "Meditation in Motion"],
        requires: &[],
    },
    TaskTemplate {
        title: "Deep Recovery",
        intent: Intent::Spirit,
        duration_min: 45,
        xp: 40,
        instructions: &["Ice Bath", "Meditation", "Sleep Preparation"],
        requires: &[],
    },
    TaskTemplate {
        title: "Technical Study",
        intent: Intent::Intellect,
        duration_min: 60,
        xp: 40,
        instructions: &["Analyze Fights", "Note Patterns", "Deep Learning"],
        requires: &[],
    },
    TaskTemplate {
        title: "Strength Foundation",
        intent: Intent::Vitality,
        duration_min: 40,
        xp: 35,
        instructions: &["Functional Movements", "Core Work", "Balance"],
        requires: &[TrainingAccess::Gym, TrainingAccess::Home],
    },
];

const JACK_TASKS: &[TaskTemplate] = &[
    TaskTemplate {
        title: "Brutal Volume",
        intent: Intent::Vitality,
        duration_min: 90,
        xp: 80,
        instructions: &["Maximum Sets", "No Rest", "Destroy Muscles"],
        requires: &[TrainingAccess::Gym],
    },
    TaskTemplate {
        title: "Pain Tolerance",
        intent: Intent::Spirit,
        duration_min: 30,
        xp: 50,
        instructions: &["Cold Exposure", "Hold Discomfort", "Embrace Pain"],
        requires: &[],
    },
    TaskTemplate {
        title: "Aggressive HIIT",
        intent: Intent::Vitality,
        duration_min: 45,
        xp: 55,
        instructions: &["Sprints", "Burpees", "Until Failure"],
        requires: &[],
    },
    TaskTemplate {
        title: "Mental Warfare",
        intent: Intent::Discipline,
        duration_min: 60,
        xp: 45,
        instructions: &["Brutal Self-Honesty", "Identify Weakness", "Plan Attack"],
        requires: &[],
    },
];

/// Ordered task templates for an archetype. Order matters: the morning
/// slot takes the first qualifying template, the evening slot searches
/// from index 1.
pub fn templates(id: ArchetypeId) -> &'static [TaskTemplate] {
    match id {
        ArchetypeId::Yujiro => YUJIRO_TASKS,
        ArchetypeId::Baki => BAKI_TASKS,
        ArchetypeId::Ohma => OHMA_TASKS,
        ArchetypeId::Jack => JACK_TASKS,
    }
}

/// Universal template: morning ritual, emitted for every archetype.
pub const MORNING_RITUAL: TaskTemplate = TaskTemplate {
    title: "Morning Ritual",
    intent: Intent::Spirit,
    duration_min: 15,
    xp: 20,
    instructions: &["Cold Water Face", "Set Intention", "Review Goals"],
    requires: &[],
};

/// Universal template: night ritual, emitted for every archetype.
pub const NIGHT_RITUAL: TaskTemplate = TaskTemplate {
    title: "Night Ritual",
    intent: Intent::Spirit,
    duration_min: 15,
    xp: 20,
    instructions: &["Reflect on Day", "Plan Tomorrow", "Gratitude"],
    requires: &[],
};

/// Universal template: deep work block, emitted when work hours allow.
pub const DEEP_WORK: TaskTemplate = TaskTemplate {
    title: "Deep Work Block",
    intent: Intent::Intellect,
    duration_min: 90,
    xp: 50,
    instructions: &["No Distractions", "Single Focus", "Timer On"],
    requires: &[],
};
