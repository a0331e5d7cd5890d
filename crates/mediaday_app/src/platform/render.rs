use std::io::{self, Write};

use mediaday_core::FormViewModel;

pub const LABEL_NAME: &str = "Nombre completo del jugador/a";
pub const LABEL_DOCUMENT: &str = "Numero de Documento";

pub fn render_title(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "CBTC Media Day 2025")?;
    writeln!(out)
}

pub fn render_prompt(out: &mut impl Write, label: &str) -> io::Result<()> {
    write!(out, "{label}: ")?;
    out.flush()
}

/// Writes the status line; nothing before the first submit.
pub fn render_status(out: &mut impl Write, view: &FormViewModel) -> io::Result<()> {
    if view.status_line.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", view.status_line)?;
    out.flush()
}
