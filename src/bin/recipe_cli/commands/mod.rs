// ABOUTME: Command implementations for recipe-cli
// ABOUTME: Catalog search, favorites, and meal plan subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

pub mod favorites;
pub mod plans;
pub mod search;
