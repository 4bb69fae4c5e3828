// SPDX-License-Identifier: MPL-2.0
//! Rendering of the toast layers.

pub mod design_tokens;
pub mod layer;
pub mod styles;
pub mod widgets;
