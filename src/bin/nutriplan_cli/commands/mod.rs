// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors
// ABOUTME: Re-exports command modules for nutriplan-cli
// ABOUTME: Provides access to target and day-plan commands

pub mod plan;
pub mod targets;
