//! Symbol table mapping human-readable identifiers to variable numbers and
//! back, for encoders that want named variables instead of bare integers.

use std::collections::HashMap;

use crate::error::{DissatError, Result};

#[derive(Default)]
pub struct Numbering {
    next_number: u32,
    identifier_to_number: HashMap<String, u32>,
    number_to_identifier: HashMap<u32, String>,
}

impl Numbering {
    pub fn new() -> Self {
        Numbering {
            next_number: 1,
            ..Default::default()
        }
    }

    /// Returns the existing number for `identifier`, or mints a fresh one.
    pub fn number_of(&mut self, identifier: &str) -> u32 {
        if let Some(&n) = self.identifier_to_number.get(identifier) {
            return n;
        }

        let n = self.next_number;
        self.next_number += 1;
        self.identifier_to_number.insert(identifier.to_string(), n);
        self.number_to_identifier.insert(n, identifier.to_string());
        n
    }

    /// Fails with `UnknownNumber` if `number` was never minted.
    pub fn identifier_of(&self, number: u32) -> Result<&str> {
        self.number_to_identifier
            .get(&number)
            .map(String::as_str)
            .ok_or(DissatError::UnknownNumber(number))
    }

    /// Translates a numeric assignment into an identifier-keyed one.
    pub fn name_assignment(&self, assignment: &HashMap<u32, bool>) -> Result<HashMap<String, bool>> {
        assignment
            .iter()
            .map(|(&number, &value)| Ok((self.identifier_of(number)?.to_string(), value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_of_is_stable_and_fresh() {
        let mut numbering = Numbering::new();
        let a = numbering.number_of("progA");
        let b = numbering.number_of("libC");
        assert_eq!(numbering.number_of("progA"), a);
        assert_ne!(a, b);
    }

    #[test]
    fn identifier_of_unknown_number_errors() {
        let numbering = Numbering::new();
        assert_eq!(
            numbering.identifier_of(1),
            Err(DissatError::UnknownNumber(1))
        );
    }

    #[test]
    fn name_assignment_round_trips() {
        let mut numbering = Numbering::new();
        let progA = numbering.number_of("progA");
        let libC = numbering.number_of("libC");

        let mut assignment = HashMap::new();
        assignment.insert(progA, true);
        assignment.insert(libC, false);

        let named = numbering.name_assignment(&assignment).unwrap();
        assert_eq!(named.get("progA"), Some(&true));
        assert_eq!(named.get("libC"), Some(&false));
    }
}
