//! Streaming console formatter
//!
//! This module provides `StreamingFormatter` which writes tree lines
//! straight to stdout as the walker produces them.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{StreamingOutput, connector};

use super::config::OutputConfig;

/// Console formatter. Directory names are bold blue when color is on;
/// prefixes and connectors are byte-identical to the plain formatter.
pub struct StreamingFormatter {
    stdout: StandardStream,
}

impl StreamingFormatter {
    pub fn new(config: OutputConfig) -> Self {
        // Terminal detection already happened when building the config
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    fn write_dir_name(&mut self, name: &str) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.stdout, "{}", name)?;
        self.stdout.reset()?;
        writeln!(self.stdout)
    }
}

impl StreamingOutput for StreamingFormatter {
    fn output_root(&mut self, name: &str) -> io::Result<()> {
        self.write_dir_name(name)
    }

    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<()> {
        write!(self.stdout, "{}{}", prefix, connector(is_last))?;
        if is_dir {
            self.write_dir_name(name)
        } else {
            writeln!(self.stdout, "{}", name)
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}
