//! All terminal output for a run.
//!
//! The [`Console`] owns the stdout/stderr writers and the spinner. Every write
//! is flushed immediately so spinner frames and diagnostics interleave in the
//! order they were produced. Write errors are ignored: a closed pipe must not
//! abort a test run.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use unicode_width::UnicodeWidthStr;

use crate::config::RunConfig;
use crate::spinner::Spinner;
use crate::suite::Suite;

/// Column width of the suite name in the per-suite header.
const HEADER_WIDTH: usize = 20;

// ============================================================================
// CAPTURE BUFFER
// ============================================================================

/// In-memory writer shared between a [`Console`] and the code inspecting it.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl WriteColor for SharedBuffer {
    fn supports_color(&self) -> bool {
        false
    }

    fn set_color(&mut self, _spec: &ColorSpec) -> io::Result<()> {
        Ok(())
    }

    fn reset(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// CONSOLE
// ============================================================================

pub struct Console {
    out: Box<dyn WriteColor>,
    err: Box<dyn WriteColor>,
    spinner: Spinner,
    quiet: bool,
    verbose: bool,
}

impl Console {
    /// Console over the process's stdout and stderr. Colours only when attached to a terminal.
    pub fn stdio(config: &RunConfig) -> Self {
        let choice = |stream| {
            if atty::is(stream) {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        };
        Self::new(
            config,
            Box::new(StandardStream::stdout(choice(atty::Stream::Stdout))),
            Box::new(StandardStream::stderr(choice(atty::Stream::Stderr))),
        )
    }

    /// Console writing into two in-memory buffers.
    pub fn captured(config: &RunConfig, out: SharedBuffer, err: SharedBuffer) -> Self {
        Self::new(config, Box::new(out), Box::new(err))
    }

    pub fn new(config: &RunConfig, out: Box<dyn WriteColor>, err: Box<dyn WriteColor>) -> Self {
        Self {
            out,
            err,
            spinner: Spinner::default(),
            quiet: config.quiet,
            verbose: config.verbose,
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn reset_spinner(&mut self) {
        self.spinner.reset();
    }

    /// Advances the spinner, overwriting the previous glyph.
    pub fn tick(&mut self) {
        if self.quiet {
            return;
        }
        let glyph = self.spinner.advance();
        let _ = write!(self.out, "\x08{}", glyph);
        let _ = self.out.flush();
    }

    /// Prints `name` padded to the header column and starts a fresh spinner.
    pub fn suite_header(&mut self, name: &str) {
        self.reset_spinner();
        let pad = HEADER_WIDTH.saturating_sub(name.width());
        let _ = write!(self.out, "{}{}:  ", name, " ".repeat(pad));
        self.tick();
        let _ = self.out.flush();
    }

    /// Clears the spinner and prints the suite's verdict.
    pub fn suite_result(&mut self, suite: &Suite) {
        if !self.quiet {
            let _ = write!(self.out, "\x08");
            let _ = self.out.flush();
        }
        if suite.failed_count == 0 {
            self.colored_line(Color::Green, "SUCCESS");
        } else {
            self.colored_line(
                Color::Red,
                &format!("FAILED {} of {}", suite.failed_count, suite.test_count),
            );
        }
    }

    /// Plain line on stdout.
    pub fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
        let _ = self.out.flush();
    }

    /// Line on stderr, only in verbose mode.
    pub fn message(&mut self, text: &str) {
        if !self.verbose {
            return;
        }
        let _ = writeln!(self.err, "{}", text);
        let _ = self.err.flush();
    }

    /// Assertion diagnostic tagged with its source line.
    pub fn diagnostic(&mut self, lineno: u32, text: &str) {
        self.message(&format!("Line {}: {}", lineno, text));
    }

    /// Line-by-line diff of two multi-line strings on stderr, only in verbose mode.
    pub fn diff(&mut self, expected: &str, actual: &str) {
        if !self.verbose {
            return;
        }
        let changeset = Changeset::new(expected, actual, "\n");
        for diff in &changeset.diffs {
            let (color, prefix, text) = match diff {
                Difference::Same(x) => (None, ' ', x),
                Difference::Rem(x) => (Some(Color::Green), '-', x),
                Difference::Add(x) => (Some(Color::Red), '+', x),
            };
            if let Some(color) = color {
                let _ = self.err.set_color(ColorSpec::new().set_fg(Some(color)));
            }
            for line in text.lines() {
                let _ = writeln!(self.err, "  {}{}", prefix, line);
            }
            let _ = self.err.reset();
        }
        let _ = self.err.flush();
    }

    fn colored_line(&mut self, color: Color, text: &str) {
        let _ = self
            .out
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(self.out, "{}", text);
        let _ = self.out.reset();
        let _ = writeln!(self.out);
        let _ = self.out.flush();
    }
}
