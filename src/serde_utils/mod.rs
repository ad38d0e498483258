// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Helpers for serializing default values.
mod defaults;

/// Macros for string wrapper tuples.
mod tuples;

/// Visitor pattern.
mod visitors;

pub use self::defaults::*;
pub use self::visitors::*;
