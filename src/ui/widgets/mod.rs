// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod translate;

pub use translate::{translate, Translate};
