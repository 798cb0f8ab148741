//! Wizard stage enumeration, stage ordering and route segment names.

use std::{fmt::Display, str::FromStr};


/// The five selection stages between intro and preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Site,
    Types,
    Keywords,
    Locations,
    Excludes,
}

impl WizardStep {
    /// Total post-intro stages, counting the preview.
    pub const STAGE_COUNT: usize = 6;

    /// 1-based position used for the progress bar.
    pub fn position(&self) -> usize {
        match self {
            WizardStep::Site => 1,
            WizardStep::Types => 2,
            WizardStep::Keywords => 3,
            WizardStep::Locations => 4,
            WizardStep::Excludes => 5,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            WizardStep::Site => "site",
            WizardStep::Types => "types",
            WizardStep::Keywords => "keywords",
            WizardStep::Locations => "locations",
            WizardStep::Excludes => "excludes",
        }
    }

    /// Short name for the document title.
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Site => "Site",
            WizardStep::Types => "Professions",
            WizardStep::Keywords => "Keywords",
            WizardStep::Locations => "Locations",
            WizardStep::Excludes => "Exclusions",
        }
    }

    /// Instruction line rendered above the step's inputs.
    pub fn prompt(&self) -> &'static str {
        match self {
            WizardStep::Site => "Choose a site to search",
            WizardStep::Types => "Choose a profession",
            WizardStep::Keywords => "Pick keywords or add your own",
            WizardStep::Locations => "Choose countries and (optionally) top cities",
            WizardStep::Excludes => "Maybe there are some keywords you want to exclude?",
        }
    }

    /// The following stage, or `None` when the preview comes next.
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Site => Some(WizardStep::Types),
            WizardStep::Types => Some(WizardStep::Keywords),
            WizardStep::Keywords => Some(WizardStep::Locations),
            WizardStep::Locations => Some(WizardStep::Excludes),
            WizardStep::Excludes => None,
        }
    }

    /// The preceding stage, or `None` when the intro comes before.
    pub fn back(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Site => None,
            WizardStep::Types => Some(WizardStep::Site),
            WizardStep::Keywords => Some(WizardStep::Types),
            WizardStep::Locations => Some(WizardStep::Keywords),
            WizardStep::Excludes => Some(WizardStep::Locations),
        }
    }
}

impl Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[derive(Debug)]
pub struct WizardStepParseError(String);

impl Display for WizardStepParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown wizard step: {}", self.0)
    }
}

impl FromStr for WizardStep {
    type Err = WizardStepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "site" => Ok(WizardStep::Site),
            "types" => Ok(WizardStep::Types),
            "keywords" => Ok(WizardStep::Keywords),
            "locations" => Ok(WizardStep::Locations),
            "excludes" => Ok(WizardStep::Excludes),
            other => Err(WizardStepParseError(other.to_string())),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [WizardStep; 5] = [
        WizardStep::Site,
        WizardStep::Types,
        WizardStep::Keywords,
        WizardStep::Locations,
        WizardStep::Excludes,
    ];

    #[test]
    fn slugs_parse_back_to_their_step() {
        for step in ALL {
            assert_eq!(step.to_string().parse::<WizardStep>().ok(), Some(step));
        }
        assert!("confetti".parse::<WizardStep>().is_err());
    }

    #[test]
    fn steps_chain_from_site_to_excludes() {
        assert_eq!(WizardStep::Site.back(), None);
        assert_eq!(WizardStep::Excludes.next(), None);
        for pair in ALL.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert_eq!(pair[1].back(), Some(pair[0]));
        }
    }

    #[test]
    fn positions_are_sequential(){
        for (index, step) in ALL.iter().enumerate() {
            assert_eq!(step.position(), index + 1);
        }
        assert!(ALL.len() < WizardStep::STAGE_COUNT);
    }
}
