//! Route segment codec for the wizard selection state.
//!
//! The selection travels between wizard steps inside the URL, serialized as
//! CBOR and base64-encoded, so every step is linkable and browser
//! back/forward navigation restores earlier selections.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use common::selection::SelectionState;
use serde::{Deserialize, Serialize};


#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SelectionParam(pub SelectionState);

impl From<SelectionState> for SelectionParam {
    fn from(state: SelectionState) -> Self {
        SelectionParam(state)
    }
}

// Display renders the segment that FromStr parses back.
impl Display for SelectionParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut bytes = Vec::new();
        if ciborium::into_writer(&self.0, &mut bytes).is_ok() {
            write!(f, "{}", URL_SAFE_NO_PAD.encode(bytes))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum SelectionParseError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl Display for SelectionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "Failed to decode base64: {}", err),
            Self::Cbor(err) => write!(f, "Failed to deserialize selection: {}", err),
        }
    }
}

impl FromStr for SelectionParam {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE_NO_PAD
            .decode(s.as_bytes())
            .map_err(SelectionParseError::Base64)?;
        let state = ciborium::from_reader(std::io::Cursor::new(bytes))
            .map_err(SelectionParseError::Cbor)?;
        Ok(SelectionParam(state))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_round_trips_a_populated_selection() {
        let mut state = SelectionState::initial();
        state.toggle_country("GB", true);
        state.toggle_city("London", true);
        state.excludes_csv = "recruiter, hiring".to_string();

        let segment = SelectionParam(state.clone()).to_string();
        let parsed: SelectionParam = segment.parse().expect("segment should parse back");
        assert_eq!(parsed.0, state);
    }

    #[test]
    fn garbage_segments_are_rejected() {
        assert!("not base64!".parse::<SelectionParam>().is_err());
        let valid_base64_garbage = URL_SAFE_NO_PAD.encode(b"not cbor");
        assert!(valid_base64_garbage.parse::<SelectionParam>().is_err());
    }
}
