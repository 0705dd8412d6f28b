// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-RecipeTree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Recipe Tree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use recipe_tree::model::{StepSequence, SynthesisStep, Tiers};

const BASES: [&str; 4] = ["Air", "Earth", "Fire", "Water"];

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// Every step feeds the previous result and one base element into the next.
    Ladder(usize),
    /// Full binary tree of `levels` derived levels.
    Balanced(u32),
    /// Each element is combined with itself: `E0 + E0 = E1`, `E1 + E1 = E2`, ...
    Doubling(usize),
}

pub fn fixture(case: Case) -> StepSequence {
    match case {
        Case::Ladder(len) => ladder(len),
        Case::Balanced(levels) => balanced(levels),
        Case::Doubling(len) => doubling(len),
    }
}

fn base(idx: usize) -> &'static str {
    BASES[idx % BASES.len()]
}

fn tier(idx: usize) -> u32 {
    u32::try_from(idx).unwrap_or(u32::MAX)
}

fn ladder(len: usize) -> StepSequence {
    let mut steps = Vec::with_capacity(len);
    let mut prev = base(0).to_owned();
    let mut prev_tier = 0;
    for idx in 0..len {
        let result = format!("Ladder{idx}");
        let result_tier = tier(idx + 1);
        steps.push(SynthesisStep::new(
            prev.as_str(),
            base(idx + 1),
            result.as_str(),
            Tiers::new(prev_tier, 0, result_tier),
        ));
        prev = result;
        prev_tier = result_tier;
    }
    StepSequence::new(steps)
}

fn balanced(levels: u32) -> StepSequence {
    let mut steps = Vec::new();
    let mut below = (0..1_usize << levels).map(|idx| base(idx).to_owned()).collect::<Vec<_>>();
    for level in 1..=levels {
        let mut current = Vec::with_capacity(below.len() / 2);
        for (idx, pair) in below.chunks(2).enumerate() {
            let result = format!("L{level}N{idx}");
            steps.push(SynthesisStep::new(
                pair[0].as_str(),
                pair[1].as_str(),
                result.as_str(),
                Tiers::new(level - 1, level - 1, level),
            ));
            current.push(result);
        }
        below = current;
    }
    StepSequence::new(steps)
}

fn doubling(len: usize) -> StepSequence {
    let mut steps = Vec::with_capacity(len);
    let mut prev = base(3).to_owned();
    for idx in 0..len {
        let result = format!("Double{idx}");
        steps.push(SynthesisStep::new(
            prev.as_str(),
            prev.as_str(),
            result.as_str(),
            Tiers::new(tier(idx), tier(idx), tier(idx + 1)),
        ));
        prev = result;
    }
    StepSequence::new(steps)
}
