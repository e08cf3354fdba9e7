// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for dieetcoach-cli
// ABOUTME: Provides plan generation, validation, regeneration, and ingredient evaluation commands

pub mod evaluate;
pub mod plan;
