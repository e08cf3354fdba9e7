// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Shared helpers for dieetcoach-cli commands
// ABOUTME: Service construction from fixtures and output formatting

pub mod display;
pub mod fixture;
