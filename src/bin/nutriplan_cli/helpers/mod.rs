// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors
// ABOUTME: Helper modules for nutriplan-cli
// ABOUTME: Output formatting shared by all commands

pub mod display;
