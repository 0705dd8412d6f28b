// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use smol_str::SmolStr;

/// Tier of each element taking part in one combination (tier 0 = base element).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tiers {
    pub left: u32,
    pub right: u32,
    pub result: u32,
}

impl Tiers {
    pub fn new(left: u32, right: u32, result: u32) -> Self {
        Self { left, right, result }
    }
}

/// One combination event: `ingredients[0] + ingredients[1] = result`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SynthesisStep {
    ingredients: [SmolStr; 2],
    result: SmolStr,
    tiers: Tiers,
}

impl SynthesisStep {
    pub fn new(
        left: impl Into<SmolStr>,
        right: impl Into<SmolStr>,
        result: impl Into<SmolStr>,
        tiers: Tiers,
    ) -> Self {
        Self { ingredients: [left.into(), right.into()], result: result.into(), tiers }
    }

    pub fn ingredients(&self) -> &[SmolStr; 2] {
        &self.ingredients
    }

    pub fn left(&self) -> &str {
        &self.ingredients[0]
    }

    pub fn right(&self) -> &str {
        &self.ingredients[1]
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn tiers(&self) -> Tiers {
        self.tiers
    }
}

/// Ordered, immutable list of synthesis steps as returned by the search backend.
///
/// Keeps an index from result name to the steps producing it, so ingredient resolution during
/// tree building does not rescan the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepSequence {
    steps: Vec<SynthesisStep>,
    producers: BTreeMap<SmolStr, SmallVec<[usize; 2]>>,
}

impl StepSequence {
    pub fn new(steps: Vec<SynthesisStep>) -> Self {
        let mut producers = BTreeMap::<SmolStr, SmallVec<[usize; 2]>>::new();
        for (idx, step) in steps.iter().enumerate() {
            producers.entry(step.result.clone()).or_default().push(idx);
        }
        Self { steps, producers }
    }

    pub fn steps(&self) -> &[SynthesisStep] {
        &self.steps
    }

    pub fn get(&self, idx: usize) -> Option<&SynthesisStep> {
        self.steps.get(idx)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the last step `< before` whose result is `element`.
    pub fn latest_producer(&self, element: &str, before: usize) -> Option<usize> {
        let indices = self.producers.get(element)?;
        let pos = indices.partition_point(|&idx| idx < before);
        pos.checked_sub(1).map(|p| indices[p])
    }

    /// `true` if any step in the sequence produces `element`.
    pub fn is_produced(&self, element: &str) -> bool {
        self.producers.contains_key(element)
    }
}

impl From<Vec<SynthesisStep>> for StepSequence {
    fn from(steps: Vec<SynthesisStep>) -> Self {
        Self::new(steps)
    }
}

impl FromIterator<SynthesisStep> for StepSequence {
    fn from_iter<I: IntoIterator<Item = SynthesisStep>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{StepSequence, SynthesisStep, Tiers};

    fn step(left: &str, right: &str, result: &str) -> SynthesisStep {
        SynthesisStep::new(left, right, result, Tiers::new(0, 0, 1))
    }

    #[test]
    fn latest_producer_only_looks_backwards() {
        let steps = StepSequence::new(vec![
            step("Earth", "Water", "Mud"),
            step("Mud", "Fire", "Brick"),
            step("Earth", "Earth", "Mud"),
            step("Mud", "Air", "Dust"),
        ]);

        assert_eq!(steps.latest_producer("Mud", 0), None);
        assert_eq!(steps.latest_producer("Mud", 1), Some(0));
        assert_eq!(steps.latest_producer("Mud", 2), Some(0));
        assert_eq!(steps.latest_producer("Mud", 3), Some(2));
        assert_eq!(steps.latest_producer("Fire", 3), None);
        assert!(steps.is_produced("Brick"));
        assert!(!steps.is_produced("Fire"));
    }

    #[test]
    fn deserializes_the_backend_step_shape() {
        let raw = r#"{"ingredients":["Earth","Water"],"result":"Mud","tiers":{"left":0,"right":0,"result":1}}"#;
        let parsed: SynthesisStep = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed, step("Earth", "Water", "Mud"));
    }

    #[test]
    fn rejects_steps_without_two_ingredients() {
        let raw = r#"{"ingredients":["Earth"],"result":"Mud","tiers":{"left":0,"right":0,"result":1}}"#;
        assert!(serde_json::from_str::<SynthesisStep>(raw).is_err());
    }

    #[test]
    fn rejects_steps_without_tiers() {
        let raw = r#"{"ingredients":["Earth","Water"],"result":"Mud"}"#;
        assert!(serde_json::from_str::<SynthesisStep>(raw).is_err());
    }
}
