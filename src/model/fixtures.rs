// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::step::{StepSequence, SynthesisStep, Tiers};

fn step(left: &str, right: &str, result: &str, tiers: (u32, u32, u32)) -> SynthesisStep {
    SynthesisStep::new(left, right, result, Tiers::new(tiers.0, tiers.1, tiers.2))
}

/// `Earth + Water = Mud`, `Mud + Fire = Brick`.
pub(crate) fn mud_brick() -> StepSequence {
    StepSequence::new(vec![
        step("Earth", "Water", "Mud", (0, 0, 1)),
        step("Mud", "Fire", "Brick", (1, 0, 2)),
    ])
}

/// `Water + Water = Puddle`.
pub(crate) fn puddle() -> StepSequence {
    StepSequence::new(vec![step("Water", "Water", "Puddle", (0, 0, 1))])
}

/// A six-step path with a derived self-combination (`Brick + Brick`), an element consumed in
/// two branches (`Fire`, `Earth`) and a dead-end step (`Puddle`) the root never uses.
pub(crate) fn house() -> StepSequence {
    StepSequence::new(vec![
        step("Earth", "Water", "Mud", (0, 0, 1)),
        step("Mud", "Fire", "Brick", (1, 0, 2)),
        step("Water", "Water", "Puddle", (0, 0, 1)),
        step("Fire", "Earth", "Lava", (0, 0, 1)),
        step("Brick", "Brick", "Wall", (2, 2, 3)),
        step("Wall", "Lava", "House", (3, 1, 4)),
    ])
}

/// `Mud` is consumed without ever being produced and is not a base element.
pub(crate) fn unresolved_ingredient() -> StepSequence {
    StepSequence::new(vec![step("Mud", "Fire", "Brick", (1, 0, 2))])
}
