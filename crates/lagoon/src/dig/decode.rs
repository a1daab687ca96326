//! Move decoding for dig-plan lines.
//!
//! Grammar: `<letter> <decimal-distance> (#<6 hex digits>)`, e.g. `R 6 (#70c710)`.
//! The whole line is validated in both modes; the mode only picks which half
//! becomes the move.

use thiserror::Error;

use super::types::{DecodeMode, Direction, Move};

/// Length of the hex payload: five distance digits plus one direction code.
const PAYLOAD_LEN: usize = 6;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line does not match `<dir> <dist> (#rrggbb)`: {0:?}")]
    Shape(String),

    #[error("unknown direction letter {0:?}")]
    Direction(char),

    #[error("invalid distance {0:?}")]
    Distance(String),

    #[error("hex payload must be six hex digits: {0:?}")]
    Color(String),

    #[error("unknown direction code {0:?} (expected 0-3)")]
    DirectionCode(char),
}

/// Raw tokens of a well-shaped line.
struct Fields<'a> {
    letter: char,
    distance: &'a str,
    payload: &'a str,
}

impl<'a> Fields<'a> {
    fn split(line: &'a str) -> Result<Self, ParseError> {
        let shape = || ParseError::Shape(line.to_string());
        let mut parts = line.split(' ');
        let (Some(dir), Some(distance), Some(color), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(shape());
        };
        let mut chars = dir.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return Err(shape());
        };
        if distance.is_empty() || !distance.bytes().all(|b| b.is_ascii_digit()) {
            return Err(shape());
        }
        let payload = color
            .strip_prefix("(#")
            .and_then(|s| s.strip_suffix(')'))
            .ok_or_else(shape)?;
        if payload.len() != PAYLOAD_LEN || !payload.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseError::Color(payload.to_string()));
        }
        Ok(Self {
            letter,
            distance,
            payload,
        })
    }
}

/// Decode one line into a `Move`. Surrounding whitespace is ignored.
pub fn decode_line(line: &str, mode: DecodeMode) -> Result<Move, ParseError> {
    let fields = Fields::split(line.trim())?;
    match mode {
        DecodeMode::Primary => {
            let direction =
                Direction::from_letter(fields.letter).ok_or(ParseError::Direction(fields.letter))?;
            let distance = fields
                .distance
                .parse::<u32>()
                .map_err(|_| ParseError::Distance(fields.distance.to_string()))?;
            Ok(Move::new(direction, distance))
        }
        DecodeMode::Alternate => {
            // Payload is validated ASCII hex, so byte slicing is on char boundaries.
            let (digits, code) = fields.payload.split_at(PAYLOAD_LEN - 1);
            let distance = u32::from_str_radix(digits, 16)
                .map_err(|_| ParseError::Color(fields.payload.to_string()))?;
            let code = code.chars().next().unwrap_or_default();
            let direction = Direction::from_code(code).ok_or(ParseError::DirectionCode(code))?;
            Ok(Move::new(direction, distance))
        }
    }
}
