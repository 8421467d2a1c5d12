//! Endless colour sequence built from shuffled groups

use crate::math::random::Randomizer;
use std::collections::VecDeque;

/// Dispenses colours one full shuffled group at a time
///
/// Every run of `colours.len()` emissions that starts on a group boundary is
/// a permutation of `colours`. When a fresh group would open with the colour
/// just emitted, that colour is swapped with the group's last entry of a
/// different colour. The iterator never ends unless the colour list is empty.
#[derive(Debug)]
pub struct ColourDispenser<'a> {
    colours: Vec<String>,
    randomizer: &'a mut Randomizer,
    group: VecDeque<String>,
    last: Option<String>,
}

impl<'a> ColourDispenser<'a> {
    /// Create a dispenser drawing shuffles from `randomizer`
    pub fn new(colours: Vec<String>, randomizer: &'a mut Randomizer) -> Self {
        Self {
            colours,
            randomizer,
            group: VecDeque::new(),
            last: None,
        }
    }

    /// Colours still waiting in the current group
    pub fn pending(&self) -> usize {
        self.group.len()
    }

    fn refill(&mut self) {
        let mut group: VecDeque<String> = self.randomizer.shuffle(&self.colours).into();
        if group.front() == self.last.as_ref() {
            // Duplicates may sit at both ends, so take the last differing entry
            let differing = group
                .iter()
                .rposition(|colour| Some(colour) != self.last.as_ref());
            if let Some(index) = differing {
                group.swap(0, index);
            }
        }
        self.group = group;
    }
}

impl Iterator for ColourDispenser<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.group.is_empty() {
            self.refill();
        }

        let colour = self.group.pop_front()?;
        self.last = Some(colour.clone());
        Some(colour)
    }
}
