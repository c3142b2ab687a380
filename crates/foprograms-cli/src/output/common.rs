// SPDX-License-Identifier: Apache-2.0

//! Common UX helpers shared by commands.

use crate::cli::OutputContext;

/// Print one narration step when running verbose in text format.
pub fn narrate(ctx: &OutputContext, message: &str) {
    if ctx.narrates() {
        println!("{message}");
    }
}
