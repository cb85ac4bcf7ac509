//! WCAG contrast grading and remediation suggestions.

use serde::{Deserialize, Serialize};

use crate::color::{contrast_ratio, parse_color, ColorError, Rgb};

/// Per-channel adjustment steps tried when searching for a fix.
const ADJUSTMENT_STEPS: [u8; 5] = [20, 40, 60, 80, 100];

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WcagLevel {
    AA,
    AAA,
}

impl WcagLevel {
    /// Minimum contrast ratio at this level for the given text size.
    pub fn required_ratio(self, large_text: bool) -> f64 {
        match self {
            WcagLevel::AAA => {
                if large_text {
                    4.5
                } else {
                    7.0
                }
            }
            WcagLevel::AA => {
                if large_text {
                    3.0
                } else {
                    4.5
                }
            }
        }
    }
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WcagLevel::AA => write!(f, "AA"),
            WcagLevel::AAA => write!(f, "AAA"),
        }
    }
}

impl std::str::FromStr for WcagLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AA" => Ok(WcagLevel::AA),
            "AAA" => Ok(WcagLevel::AAA),
            _ => Err(format!("unknown WCAG level: {}", s)),
        }
    }
}

/// Descriptive grade for a contrast ratio.
///
/// Graded top-down on the ratio alone, irrespective of the level the
/// check ran at. `AaaPlus` is only reachable for normal-size text; at
/// large sizes a ratio past 7.0 still reads "AAA".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    Fail,
    AA,
    AAA,
    #[serde(rename = "AAA+")]
    AaaPlus,
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::Fail => write!(f, "Fail"),
            Grade::AA => write!(f, "AA"),
            Grade::AAA => write!(f, "AAA"),
            Grade::AaaPlus => write!(f, "AAA+"),
        }
    }
}

/// Grade a ratio against the fixed WCAG bands.
pub fn grade_ratio(ratio: f64, large_text: bool) -> Grade {
    if ratio >= 7.0 {
        if large_text {
            Grade::AAA
        } else {
            Grade::AaaPlus
        }
    } else if ratio >= 4.5 {
        if large_text {
            Grade::AAA
        } else {
            Grade::AA
        }
    } else if ratio >= 3.0 {
        if large_text {
            Grade::AA
        } else {
            Grade::Fail
        }
    } else {
        Grade::Fail
    }
}

/// Result of a contrast compliance check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContrastResult {
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub level: WcagLevel,
    pub large_text: bool,
    pub required: f64,
    pub passes: bool,
    pub grade: Grade,
}

/// Check a foreground/background pair against a WCAG level.
pub fn check_compliance(
    foreground: &str,
    background: &str,
    level: WcagLevel,
    large_text: bool,
) -> Result<ContrastResult, ColorError> {
    let fg = parse_color(foreground)?;
    let bg = parse_color(background)?;
    let ratio = contrast_ratio(fg, bg);
    let required = level.required_ratio(large_text);

    Ok(ContrastResult {
        foreground: foreground.to_string(),
        background: background.to_string(),
        ratio,
        level,
        large_text,
        required,
        passes: ratio >= required,
        grade: grade_ratio(ratio, large_text),
    })
}

/// A single color adjustment that reaches the target ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    /// Adjusted color in `#rrggbb` form.
    pub color: String,
    /// Ratio achieved against the unchanged other color.
    pub ratio: f64,
}

/// Suggested fixes for an insufficient contrast pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentSuggestions {
    pub target: f64,
    pub darken_foreground: Option<Adjustment>,
    pub lighten_background: Option<Adjustment>,
}

/// Search the fixed adjustment steps for a color change meeting `target`.
///
/// Darkening the foreground and lightening the background are tried
/// independently; each direction reports the first step that qualifies,
/// or nothing if none of the five steps does.
pub fn suggest_adjustments(
    foreground: &str,
    background: &str,
    target: f64,
) -> Result<AdjustmentSuggestions, ColorError> {
    let fg = parse_color(foreground)?;
    let bg = parse_color(background)?;

    let darken_foreground = first_qualifying(target, |step| {
        let adjusted = fg.darken(step);
        (adjusted, contrast_ratio(adjusted, bg))
    });
    let lighten_background = first_qualifying(target, |step| {
        let adjusted = bg.lighten(step);
        (adjusted, contrast_ratio(fg, adjusted))
    });

    Ok(AdjustmentSuggestions {
        target,
        darken_foreground,
        lighten_background,
    })
}

fn first_qualifying(target: f64, try_step: impl Fn(u8) -> (Rgb, f64)) -> Option<Adjustment> {
    for step in ADJUSTMENT_STEPS {
        let (adjusted, ratio) = try_step(step);
        if ratio >= target {
            return Some(Adjustment {
                color: adjusted.to_hex(),
                ratio,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_ratios() {
        assert_eq!(WcagLevel::AA.required_ratio(false), 4.5);
        assert_eq!(WcagLevel::AA.required_ratio(true), 3.0);
        assert_eq!(WcagLevel::AAA.required_ratio(false), 7.0);
        assert_eq!(WcagLevel::AAA.required_ratio(true), 4.5);
    }

    #[test]
    fn test_level_parsing_is_case_insensitive() {
        assert_eq!("aa".parse::<WcagLevel>().unwrap(), WcagLevel::AA);
        assert_eq!("Aaa".parse::<WcagLevel>().unwrap(), WcagLevel::AAA);
        assert!("AAAA".parse::<WcagLevel>().is_err());
    }

    #[test]
    fn test_grade_bands_normal_text() {
        assert_eq!(grade_ratio(21.0, false), Grade::AaaPlus);
        assert_eq!(grade_ratio(7.0, false), Grade::AaaPlus);
        assert_eq!(grade_ratio(5.0, false), Grade::AA);
        assert_eq!(grade_ratio(4.0, false), Grade::Fail);
        assert_eq!(grade_ratio(1.0, false), Grade::Fail);
    }

    #[test]
    fn test_grade_bands_large_text() {
        // AAA+ is never reachable at large sizes.
        assert_eq!(grade_ratio(21.0, true), Grade::AAA);
        assert_eq!(grade_ratio(5.0, true), Grade::AAA);
        assert_eq!(grade_ratio(3.5, true), Grade::AA);
        assert_eq!(grade_ratio(2.0, true), Grade::Fail);
    }

    #[test]
    fn test_black_on_white_passes_everything() {
        let result = check_compliance("#000000", "#FFFFFF", WcagLevel::AAA, false).unwrap();
        assert!(result.passes);
        assert_eq!(result.grade, Grade::AaaPlus);
        assert!((result.ratio - 21.0).abs() < 1e-2);
    }

    #[test]
    fn test_boundary_passes_aa_fails_aaa() {
        let aa = check_compliance("#767676", "#FFFFFF", WcagLevel::AA, false).unwrap();
        assert!(aa.passes);
        assert_eq!(aa.grade, Grade::AA);

        let aaa = check_compliance("#767676", "#FFFFFF", WcagLevel::AAA, false).unwrap();
        assert!(!aaa.passes);
        assert_eq!(aaa.grade, Grade::AA);
        assert_eq!(aaa.required, 7.0);
    }

    #[test]
    fn test_large_text_aaa_grade_pass_consistency() {
        // Ratio in [4.5, 7.0) with large text at level AAA: grade AAA and
        // passes agree; the plus grade stays out of reach.
        let result = check_compliance("#767676", "#FFFFFF", WcagLevel::AAA, true).unwrap();
        assert!(result.passes);
        assert_eq!(result.grade, Grade::AAA);
    }

    #[test]
    fn test_invalid_color_propagates() {
        assert!(check_compliance("notacolor", "#FFF", WcagLevel::AA, false).is_err());
        assert!(suggest_adjustments("#FFF", "blorp", 4.5).is_err());
    }

    #[test]
    fn test_suggestions_reach_target() {
        // Mid-gray on white misses AA; darkening the foreground can fix it.
        let suggestions = suggest_adjustments("#999999", "#FFFFFF", 4.5).unwrap();
        let darkened = suggestions.darken_foreground.expect("darkening should qualify");
        assert!(darkened.ratio >= 4.5);

        // Background is already at full white, lightening cannot help.
        assert!(suggestions.lighten_background.is_none());
    }

    #[test]
    fn test_no_suggestion_when_steps_insufficient() {
        // White on white: even -100 per channel leaves the pair far below 21:1.
        let suggestions = suggest_adjustments("#FFFFFF", "#FFFFFF", 21.0).unwrap();
        assert!(suggestions.darken_foreground.is_none());
        assert!(suggestions.lighten_background.is_none());
    }

    #[test]
    fn test_grade_displays() {
        assert_eq!(Grade::Fail.to_string(), "Fail");
        assert_eq!(Grade::AaaPlus.to_string(), "AAA+");
    }
}
