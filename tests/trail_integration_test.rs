// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the trail-based backtracking system.
//!
//! These tests verify that the trail works correctly when integrated
//! with SearchContext, demonstrating the core backtracking behavior that
//! the search engine depends on.

use cayley_search::SearchContext;

#[test]
fn test_search_context_simple_backtracking() {
    let mut ctx = SearchContext::new(3);

    // Checkpoint and modify
    let checkpoint = ctx.trail.len();
    ctx.assign(0, 100);

    assert_eq!(ctx.slot(0), 100);
    assert_eq!(ctx.trail.len(), 1);

    // Rewind restores old value automatically
    ctx.rewind_to(checkpoint);
    assert_eq!(ctx.slot(0), 0);
    assert_eq!(ctx.trail.len(), 0);
}

#[test]
fn test_nested_checkpoints() {
    let mut ctx = SearchContext::new(3);

    let cp1 = ctx.trail.len();
    assert_eq!(cp1, 0);

    ctx.assign(0, 999);
    ctx.assign(1, 888);
    ctx.assign(2, 777);
    assert_eq!(ctx.slots(), &[999, 888, 777]);
    assert_eq!(ctx.trail.len(), 3);

    // Nested checkpoint
    let cp2 = ctx.trail.len();
    ctx.assign(0, 111);
    assert_eq!(ctx.trail.len(), 4);

    // Rewind to cp2
    ctx.rewind_to(cp2);
    assert_eq!(ctx.slots(), &[999, 888, 777]);
    assert_eq!(ctx.trail.len(), 3);

    // Rewind to cp1
    ctx.rewind_to(cp1);
    assert_eq!(ctx.slots(), &[0, 0, 0]);
    assert!(ctx.trail.is_empty());
}

#[test]
fn test_repeated_assignment_to_one_slot() {
    let mut ctx = SearchContext::new(1);
    ctx.assign(0, 5);
    let checkpoint = ctx.trail.len();

    ctx.assign(0, 6);
    ctx.assign(0, 7);
    ctx.assign(0, 8);
    assert_eq!(ctx.slot(0), 8);

    ctx.rewind_to(checkpoint);
    assert_eq!(ctx.slot(0), 5);
}

#[test]
fn test_rewind_to_current_length_is_noop() {
    let mut ctx = SearchContext::new(2);
    ctx.assign(1, 4);
    ctx.rewind_to(ctx.trail.len());
    assert_eq!(ctx.slots(), &[0, 4]);
    assert_eq!(ctx.trail.len(), 1);
}

#[test]
fn test_many_changes() {
    let mut ctx = SearchContext::new(64);
    let checkpoint = ctx.trail.len();

    for round in 1..=10 {
        for slot in 0..64 {
            ctx.assign(slot, round * 100 + slot);
        }
    }
    assert_eq!(ctx.trail.len(), 640);
    assert_eq!(ctx.slot(63), 1063);

    ctx.rewind_to(checkpoint);
    assert!(ctx.slots().iter().all(|&value| value == 0));
}
