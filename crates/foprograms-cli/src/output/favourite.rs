// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::FavouriteResult;

use super::Renderable;

impl Renderable for FavouriteResult {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        if ctx.verbose {
            writeln!(w)?;
            writeln!(w, "{}", style(&self.detail).bold())?;
            writeln!(w)?;
        } else {
            writeln!(w, "{}", self.favourite_language.as_deref().unwrap_or_default())?;
        }
        Ok(())
    }
}
