/// Bounded top-2 scan over a stream of values.
///
/// Keeps the largest and the second largest value pushed so far. A value equal to
/// the current largest goes to the second slot, so the first occurrence keeps the top one.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub struct SecondLargest {
    largest: Option<u64>,
    second: Option<u64>,
}

impl SecondLargest {
    pub const fn new() -> Self {
        Self {
            largest: None,
            second: None,
        }
    }

    pub fn push(&mut self, value: u64) {
        match self.largest {
            Some(largest) if value > largest => {
                self.second = Some(largest);
                self.largest = Some(value);
            }
            Some(_) => {
                if self.second.map_or(true, |second| value > second) {
                    self.second = Some(value);
                }
            }
            None => self.largest = Some(value),
        }
    }

    /// Returns largest value pushed
    pub fn largest(&self) -> Option<u64> {
        self.largest
    }

    /// Returns second largest value pushed, `None` until at least two values were seen
    pub fn second(&self) -> Option<u64> {
        self.second
    }
}

impl Extend<u64> for SecondLargest {
    fn extend<I: IntoIterator<Item = u64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
