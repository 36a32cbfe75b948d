use serde::{Deserialize, Serialize};

use super::Hand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HapticBinding {
    pub hand: Hand,
}

impl HapticBinding {
    pub const fn new(hand: Hand) -> Self {
        Self { hand }
    }
}
