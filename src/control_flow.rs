//==============================================================================
// Control-flow tour
//==============================================================================
//
// Runs a branch, a while loop, a do-while loop, a for loop and a match, each
// gated on `add` over three counters. With all counters starting at zero the
// whole sequence is fixed: then-arm, 0, 1, 0 iterations, match arm 0.

use tracing::debug;

use crate::arith::{add, is_truthy};
use crate::error::{DemoError, Result};

pub const MAX_ITERATIONS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchArm {
    Then,
    Else,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchArm {
    Zero,
    One,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub d: i32,
    pub e: i32,
    pub f: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlFlowTrace {
    pub branch: BranchArm,
    pub while_iterations: usize,
    pub do_while_iterations: usize,
    pub for_iterations: usize,
    pub match_arm: MatchArm,
    pub counters: Counters,
}

fn guard(construct: &'static str, iterations: usize) -> Result<()> {
    if iterations >= MAX_ITERATIONS {
        return Err(DemoError::RunawayLoop {
            construct,
            limit: MAX_ITERATIONS,
        });
    }
    Ok(())
}

/// Runs the sequence starting from `d = e = f = 0`.
pub fn run() -> Result<ControlFlowTrace> {
    run_from(Counters { d: 0, e: 0, f: 0 })
}

pub fn run_from(start: Counters) -> Result<ControlFlowTrace> {
    let Counters { mut d, mut e, mut f } = start;

    let branch = if is_truthy(add(d, 2, f)) {
        d = e;
        BranchArm::Then
    } else {
        d = f;
        BranchArm::Else
    };

    let mut while_iterations = 0;
    while is_truthy(add(d, e, f)) {
        guard("while", while_iterations)?;
        d = 0;
        while_iterations += 1;
    }

    let mut do_while_iterations = 0;
    loop {
        guard("do-while", do_while_iterations)?;
        e = 0;
        do_while_iterations += 1;
        if !is_truthy(add(d, e, f)) {
            break;
        }
    }

    let mut for_iterations = 0;
    d = 0;
    while (d as i64) < add(d, e, f) {
        guard("for", for_iterations)?;
        f = 0;
        for_iterations += 1;
        d += 1;
    }

    let match_arm = match add(d, e, f) {
        0 => MatchArm::Zero,
        1 => MatchArm::One,
        _ => MatchArm::Other,
    };

    let trace = ControlFlowTrace {
        branch,
        while_iterations,
        do_while_iterations,
        for_iterations,
        match_arm,
        counters: Counters { d, e, f },
    };
    debug!(?trace, "control flow finished");
    Ok(trace)
}
