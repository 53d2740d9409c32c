//! Rendering of [`Report`]s for the terminal or for other programs.

use crate::checker::{Answer, Outcome, Report};
use console::style;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Human readable sentences, one block per name.
    #[default]
    Text,
    /// One JSON object per name and line.
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: Format,
    /// Include the raw lookup results in text output.
    pub verbose: bool,
    pub color: bool,
}

/// Writes reports to `out` in the order they are rendered.
pub struct Renderer<W> {
    out: W,
    options: RenderOptions,
    first: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, options: RenderOptions) -> Self {
        Self {
            out,
            options,
            first: true,
        }
    }

    /// Render one report.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn render(&mut self, report: &Report) -> io::Result<()> {
        match self.options.format {
            Format::Text => self.render_text(report)?,
            Format::Json => {
                serde_json::to_writer(&mut self.out, report)?;
                writeln!(self.out)?;
            }
        }
        self.first = false;
        self.out.flush()
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    fn render_text(&mut self, report: &Report) -> io::Result<()> {
        if !self.first {
            writeln!(self.out)?;
        }
        writeln!(self.out, "Checking for DNS name: {}", report.name)?;
        if self.options.verbose {
            match report.cname_target() {
                Some(target) => writeln!(self.out, "CNAME resolve: {target}")?,
                None => self.render_raw("CNAME resolve", &report.cname)?,
            }
            self.render_raw("TXTs at CNAME", &report.txt_at_cname)?;
            self.render_raw("Straight TXTs", &report.txt_direct)?;
        }

        let cname = list(report.cname.values());
        let txt_at_cname = list(report.txt_at_cname.values());
        let txt_direct = list(report.txt_direct.values());
        match report.outcome {
            Outcome::CnameWithTxt => writeln!(
                self.out,
                "This name{} that points to {cname}{} {txt_at_cname}",
                self.good(" has a CNAME record"),
                self.good(" and has these TXTs:"),
            )?,
            Outcome::CnameNoTxt => writeln!(
                self.out,
                "This name{} that points to {cname}{}",
                self.good(" has a CNAME record"),
                self.bad(" but it doesn't have any TXTs"),
            )?,
            Outcome::NoCnameWithTxt => writeln!(
                self.out,
                "This name{}{} {txt_direct}",
                self.bad(" doesn't have a CNAME record"),
                self.good(" but it has straight TXT records:"),
            )?,
            Outcome::NoCnameNoTxt => writeln!(
                self.out,
                "This name{}{}",
                self.bad(" doesn't have a CNAME record"),
                self.bad(" and it doesn't have any straight TXT records"),
            )?,
        }
        if let Some(values) = report.straight_txt_note() {
            let note = style("It also has straight TXT records:")
                .yellow()
                .force_styling(self.options.color);
            writeln!(self.out, "{note} {}", list(values))?;
        }
        Ok(())
    }

    fn render_raw(&mut self, what: &str, answer: &Answer) -> io::Result<()> {
        match answer {
            Answer::Found { values } => writeln!(self.out, "{what}: {}", list(values)),
            Answer::Absent { reason } => writeln!(self.out, "{what}: none ({reason})"),
            Answer::Skipped => Ok(()),
        }
    }

    fn good(&self, s: &'static str) -> console::StyledObject<&'static str> {
        style(s).green().force_styling(self.options.color)
    }

    fn bad(&self, s: &'static str) -> console::StyledObject<&'static str> {
        style(s).red().force_styling(self.options.color)
    }
}

fn list(values: &[String]) -> String {
    format!("[{}]", values.join(" "))
}
