// ABOUTME: Re-exports application constants from recipe-core
// ABOUTME: Storage keys, discovery sizes, nutrition estimates, ports, and timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

pub use recipe_core::constants::*;
