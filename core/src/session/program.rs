//! Multi-day guided programs.
//!
//! A program pairs a day count with a small rotation of patterns; the
//! pattern for a given day is picked round-robin. Progress advances one
//! day at a time as the user completes practice.

use serde::{Deserialize, Serialize};

use breathe_types::Pattern;

/// A named multi-day practice plan. Programs always carry at least one
/// pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Icon hint for presentation layers.
    pub icon: String,
    pub days: u32,
    pub patterns: Vec<Pattern>,
}

/// Progress through a program, one day at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramProgress {
    program: Program,
    current_day: u32,
}

impl ProgramProgress {
    /// Begin a program at day 1.
    pub fn start(program: Program) -> Self {
        Self {
            program,
            current_day: 1,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    /// The pattern assigned to the current day, rotating through the
    /// program's pattern list.
    pub fn pattern_for_today(&self) -> &Pattern {
        let idx = (self.current_day as usize - 1) % self.program.patterns.len();
        &self.program.patterns[idx]
    }

    /// Fraction of the program finished so far.
    pub fn progress(&self) -> f64 {
        self.current_day as f64 / self.program.days as f64
    }

    pub fn is_finished(&self) -> bool {
        self.current_day >= self.program.days
    }

    /// Mark today's practice done and advance to the next day. Returns
    /// whether the whole program is now finished.
    pub fn complete_day(&mut self) -> bool {
        if self.current_day < self.program.days {
            self.current_day += 1;
        }
        self.is_finished()
    }
}

/// The program set shipped with the application.
pub fn builtin_programs() -> Vec<Program> {
    vec![
        Program {
            id: "sleep".to_string(),
            name: "Better Sleep".to_string(),
            description: "A 7-day program to help you fall asleep faster and improve sleep quality"
                .to_string(),
            icon: "moon".to_string(),
            days: 7,
            patterns: vec![
                Pattern::fixed(
                    "4-7-8 Breathing",
                    "Inhale through your nose for 4 seconds; Hold your breath for 7 seconds; \
                     Exhale completely through your mouth for 8 seconds",
                    4.0,
                    7.0,
                    8.0,
                    0.0,
                ),
                Pattern::fixed(
                    "Extended Exhale",
                    "Inhale through your nose for 4 seconds; Exhale slowly through your mouth \
                     for 6 seconds; Repeat",
                    4.0,
                    0.0,
                    6.0,
                    0.0,
                ),
            ],
        },
        Program {
            id: "stress".to_string(),
            name: "Stress Reduction".to_string(),
            description: "A 14-day program to help manage stress and anxiety".to_string(),
            icon: "brain".to_string(),
            days: 14,
            patterns: vec![
                Pattern::fixed(
                    "Box Breathing",
                    "Inhale for 4 seconds; Hold for 4 seconds; Exhale for 4 seconds; \
                     Hold for 4 seconds",
                    4.0,
                    4.0,
                    4.0,
                    4.0,
                ),
                Pattern::fixed(
                    "Calming Breath",
                    "Inhale for 4 seconds; Hold briefly; Exhale for 6 seconds; Pause briefly",
                    4.0,
                    1.0,
                    6.0,
                    1.0,
                ),
            ],
        },
        Program {
            id: "energy".to_string(),
            name: "Energy Boost".to_string(),
            description: "A 5-day program to increase energy and alertness".to_string(),
            icon: "zap".to_string(),
            days: 5,
            patterns: vec![
                Pattern::sequence(
                    "Stimulating Breath",
                    "Quick inhales and exhales through the nose; Keep the mouth closed; \
                     Aim for 3 cycles per second",
                    vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
                    0.0,
                ),
                Pattern::fixed(
                    "Bellows Breath",
                    "Inhale and exhale rapidly through your nose; Keep the breaths equal \
                     in duration",
                    2.0,
                    0.0,
                    2.0,
                    0.0,
                ),
            ],
        },
        Program {
            id: "focus".to_string(),
            name: "Improved Focus".to_string(),
            description: "A 10-day program to enhance concentration and mental clarity".to_string(),
            icon: "heart".to_string(),
            days: 10,
            patterns: vec![
                Pattern::fixed(
                    "4-4-4-4 Breathing",
                    "Inhale for 4 seconds; Hold for 4 seconds; Exhale for 4 seconds; \
                     Hold for 4 seconds",
                    4.0,
                    4.0,
                    4.0,
                    4.0,
                ),
                Pattern::fixed(
                    "Alternate Nostril",
                    "Breathe through one nostril at a time; Inhale for 4, hold for 2, \
                     exhale for 4; Alternate sides",
                    4.0,
                    2.0,
                    4.0,
                    0.0,
                ),
            ],
        },
    ]
}
