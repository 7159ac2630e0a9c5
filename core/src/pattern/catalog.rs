//! Built-in breathing patterns.
//!
//! These exist for the lifetime of the process; user-defined patterns are
//! layered on top by the registry.

use breathe_types::Pattern;

/// The pattern set shipped with the application.
pub fn builtin_patterns() -> Vec<Pattern> {
    vec![
        Pattern::fixed(
            "Box Breathing",
            "Inhale for 4 seconds; Hold for 4 seconds; Exhale for 4 seconds; Hold for 4 seconds",
            4.0,
            4.0,
            4.0,
            4.0,
        ),
        Pattern::fixed(
            "4-7-8 Breathing",
            "Inhale for 4 seconds; Hold for 7 seconds; Exhale for 8 seconds",
            4.0,
            7.0,
            8.0,
            0.0,
        ),
        Pattern::sequence(
            "Spiral Breathing",
            "Start with 13-second breaths, then gradually decrease to 8, 5, 3, 2, and 1 second; \
             Hold for 13 seconds at the end of the cycle; Repeat",
            vec![13.0, 8.0, 5.0, 3.0, 2.0, 1.0],
            13.0,
        ),
        Pattern::fixed(
            "Wim Hof Breath",
            "30 deep breaths, hold after last exhale (30-60s), inhale deeply, hold for 15s, \
             repeat 3-4 rounds",
            2.0,
            0.0,
            2.0,
            0.0,
        ),
        Pattern::fixed(
            "Triangle Breath",
            "Inhale 5s, Hold 5s, Exhale 5s",
            5.0,
            5.0,
            5.0,
            0.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::validate;

    #[test]
    fn test_builtins_are_valid() {
        for pattern in builtin_patterns() {
            validate(&pattern).unwrap_or_else(|e| panic!("{}: {e}", pattern.name));
        }
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let patterns = builtin_patterns();
        for (i, a) in patterns.iter().enumerate() {
            for b in &patterns[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
