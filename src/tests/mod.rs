// Copyright 2026 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Unit tests that cross module boundaries.

pub mod helpers;
mod interaction_tests;
