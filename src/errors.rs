// ABOUTME: Re-exports the unified error types from recipe-core
// ABOUTME: AppError, ErrorCode, and StorageError for use across the service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Planner Contributors

pub use recipe_core::errors::*;
