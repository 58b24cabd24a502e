//! Supported exercises

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownExercise;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Exercise {
    #[default]
    Pushups,
    Squats,
}

impl Exercise {
    pub const ALL: [Exercise; 2] = [Exercise::Pushups, Exercise::Squats];

    /// Display label ("Pushups", "Squats")
    pub fn label(&self) -> &'static str {
        match self {
            Exercise::Pushups => "Pushups",
            Exercise::Squats => "Squats",
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Exercise {
    type Err = UnknownExercise;

    /// Accepts the display label or the singular form, in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pushups" | "pushup" | "push-ups" | "push-up" => Ok(Exercise::Pushups),
            "squats" | "squat" => Ok(Exercise::Squats),
            _ => Err(UnknownExercise(s.to_string())),
        }
    }
}
