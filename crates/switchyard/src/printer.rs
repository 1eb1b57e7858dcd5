//! Usage and help rendering over the registry's read surface.

use console::Style;

use crate::argument::Argument;
use crate::flag::Flag;
use crate::options::Options;

const MAX_WIDTH: usize = 80;
const SECTION_SHIFT: usize = 4;
const COUNT_LABEL: &str = "COUNT";

/// Renders usage and help text for one registry node.
///
/// Pure formatting over [`Options`]' read-only queries. Section headers
/// can be bolded for terminal output with [`styled`](Printer::styled);
/// the default is plain text.
#[derive(Debug)]
pub struct Printer<'a> {
    options: &'a Options,
    styled: bool,
}

impl<'a> Printer<'a> {
    /// Creates a printer over `options`.
    pub fn new(options: &'a Options) -> Self {
        Self { options, styled: false }
    }

    /// Enables terminal styling of section headers.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// One-line usage summary: `usage: NAME` followed by a fragment per
    /// flag, argument, and the subcommand alternation. Optional items are
    /// bracketed, repeatable items carry `...`.
    pub fn usage(&self) -> String {
        let mut out = format!("usage: {}", self.options.name());

        for flag in self.options.flags() {
            out.push_str(" [");
            out.push_str(&switch_name(flag.short_name(), flag.long_name()));
            if flag.is_counting() {
                out.push_str("...");
            }
            out.push(']');
        }

        for argument in self.options.arguments() {
            out.push(' ');
            if !argument.is_required() {
                out.push('[');
            }
            out.push_str(&switch_name(argument.short_name(), argument.long_name()));
            if !argument.label().is_empty() {
                out.push(' ');
                out.push_str(argument.label());
            }
            if argument.is_list() {
                out.push_str("...");
            }
            if !argument.is_required() {
                out.push(']');
            }
        }

        let subcommands = self.options.subcommands();
        if !subcommands.is_empty() {
            out.push_str(" [");
            for (i, subcommand) in subcommands.iter().enumerate() {
                if i != 0 {
                    out.push('|');
                }
                out.push_str(subcommand.name());
            }
            out.push(']');
        }

        out
    }

    /// Long help: FLAGS, ARGUMENTS, and SUBCOMMANDS sections with aligned
    /// columns, `*` marking required arguments, `default:` lines, and
    /// descriptions word-wrapped at 80 columns.
    pub fn help(&self) -> String {
        let layout = Layout::measure(self.options);
        let mut out = String::new();

        if !self.options.flags().is_empty() {
            out.push_str(&self.header("FLAGS:"));
            out.push('\n');
            for flag in self.options.flags() {
                self.flag_line(&mut out, flag, &layout);
            }
            out.push('\n');
        }

        if !self.options.arguments().is_empty() {
            out.push_str(&self.header("ARGUMENTS:"));
            out.push('\n');
            for argument in self.options.arguments() {
                self.argument_line(&mut out, argument, &layout);
            }
            out.push('\n');
        }

        if !self.options.subcommands().is_empty() {
            out.push_str(&self.header("SUBCOMMANDS:"));
            out.push('\n');
            for subcommand in self.options.subcommands() {
                out.push_str(&" ".repeat(SECTION_SHIFT));
                out.push_str(&pad(subcommand.name(), layout.sub_width));
                out.push(' ');
                let indent = SECTION_SHIFT + layout.sub_width + 1;
                out.push_str(&wrap(subcommand.description(), MAX_WIDTH - indent, indent));
                out.push('\n');
            }
            out.push('\n');
        }

        out
    }

    fn header(&self, text: &str) -> String {
        if self.styled {
            Style::new().bold().apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn flag_line(&self, out: &mut String, flag: &Flag, layout: &Layout) {
        out.push_str(&" ".repeat(SECTION_SHIFT));
        layout.names(out, flag.short_name(), flag.long_name());
        out.push(' ');
        out.push_str(&pad(if flag.is_counting() { COUNT_LABEL } else { "" }, layout.type_width));
        out.push(' ');
        out.push_str(&wrap(flag.description(), layout.description_width(), layout.description_shift()));
        out.push('\n');
    }

    fn argument_line(&self, out: &mut String, argument: &Argument, layout: &Layout) {
        if argument.is_required() {
            out.push_str(&" ".repeat(SECTION_SHIFT - 1));
            out.push('*');
        } else {
            out.push_str(&" ".repeat(SECTION_SHIFT));
        }
        layout.names(out, argument.short_name(), argument.long_name());
        out.push(' ');
        out.push_str(&pad(argument.label(), layout.type_width));
        out.push(' ');
        out.push_str(&wrap(argument.description(), layout.description_width(), layout.description_shift()));
        out.push('\n');
        if let Some(default) = argument.default_value() {
            out.push_str(&" ".repeat(layout.description_shift()));
            out.push_str(&format!("default: {default}"));
            out.push('\n');
        }
    }
}

/// Column widths measured over one node.
struct Layout {
    has_short: bool,
    long_width: usize,
    type_width: usize,
    sub_width: usize,
}

impl Layout {
    fn measure(options: &Options) -> Self {
        let mut layout = Layout { has_short: false, long_width: 0, type_width: 0, sub_width: 0 };

        for flag in options.flags() {
            layout.consider(flag.short_name(), flag.long_name());
            if flag.is_counting() {
                layout.type_width = layout.type_width.max(COUNT_LABEL.len());
            }
        }
        for argument in options.arguments() {
            layout.consider(argument.short_name(), argument.long_name());
            layout.type_width = layout.type_width.max(argument.label().len());
        }
        for subcommand in options.subcommands() {
            layout.sub_width = layout.sub_width.max(subcommand.name().len());
        }

        layout
    }

    fn consider(&mut self, short: Option<char>, long: Option<&str>) {
        if short.is_some() {
            self.has_short = true;
        }
        if let Some(long) = long {
            self.long_width = self.long_width.max(long.len());
        }
    }

    /// Writes the aligned `-s|--long` name columns.
    fn names(&self, out: &mut String, short: Option<char>, long: Option<&str>) {
        if self.has_short {
            match short {
                Some(short) => {
                    out.push('-');
                    out.push(short);
                }
                None => out.push_str("  "),
            }
        }
        if self.long_width == 0 {
            return;
        }
        match long {
            Some(long) => {
                out.push(if short.is_some() && self.has_short { '|' } else { ' ' });
                out.push_str("--");
                out.push_str(&pad(long, self.long_width));
            }
            None => out.push_str(&" ".repeat(self.long_width + 3)),
        }
    }

    fn description_shift(&self) -> usize {
        let mut shift = SECTION_SHIFT;
        if self.has_short {
            shift += 2;
        }
        if self.long_width != 0 {
            shift += self.long_width + 3;
        }
        shift + self.type_width + 2
    }

    fn description_width(&self) -> usize {
        MAX_WIDTH.saturating_sub(self.description_shift()).max(20)
    }
}

fn switch_name(short: Option<char>, long: Option<&str>) -> String {
    match (short, long) {
        (Some(short), Some(long)) => format!("-{short}|--{long}"),
        (Some(short), None) => format!("-{short}"),
        (None, Some(long)) => format!("--{long}"),
        (None, None) => String::new(),
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

/// Word-wraps `text` to `width`, indenting continuation lines by `indent`.
fn wrap(text: &str, width: usize, indent: usize) -> String {
    let mut out = String::new();
    let mut line_len = 0;
    for word in text.split_whitespace() {
        if line_len > 0 && line_len + 1 + word.len() > width {
            out.push('\n');
            out.push_str(&" ".repeat(indent));
            line_len = 0;
        } else if line_len > 0 {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(word);
        line_len += word.len();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::Argument;
    use crate::builder::Builder;
    use crate::flag::Flag;

    fn sample() -> Options {
        Builder::new("test", "test options")
            .flag(Flag::boolean("simple flag").short('s').long("simple"))
            .flag(Flag::counting("set verbosity level").short('v'))
            .argument(Argument::single::<i64>("input value").short('i').long("input").label("INT").required())
            .argument(Argument::single::<i64>("chunk size").long("chunk").label("INT").default(10))
            .subcommand(Builder::new("add", "adds an entry"))
            .subcommand(Builder::new("list", "lists entries"))
            .build()
            .unwrap()
    }

    #[test]
    fn usage_line() {
        let options = sample();
        let usage = Printer::new(&options).usage();
        assert_eq!(
            usage,
            "usage: test [-s|--simple] [-v...] -i|--input INT [--chunk INT] [add|list]"
        );
    }

    #[test]
    fn help_sections_and_alignment() {
        let options = sample();
        let help = Printer::new(&options).help();

        assert!(help.contains("FLAGS:\n"));
        assert!(help.contains("ARGUMENTS:\n"));
        assert!(help.contains("SUBCOMMANDS:\n"));
        assert!(help.contains("    -s|--simple"));
        assert!(help.contains("-v"));
        assert!(help.contains("COUNT"));
        // Required arguments are starred.
        assert!(help.contains("   *-i|--input"));
        assert!(help.contains("default: 10"));
        assert!(help.contains("add  adds an entry"));
    }

    #[test]
    fn long_descriptions_wrap_with_indent() {
        let options = Builder::new("test", "test options")
            .flag(Flag::boolean(
                "some flag description some flag description some flag description some \
                 flag description some flag description some flag description",
            ).short('l'))
            .build()
            .unwrap();
        let help = Printer::new(&options).help();
        let lines: Vec<&str> = help.lines().collect();
        assert!(lines.len() > 2);
        assert!(lines.iter().all(|l| l.len() <= MAX_WIDTH));
        // Continuation lines are indented to the description column.
        assert!(lines[2].starts_with("        "));
    }

    #[test]
    fn unstyled_output_has_no_escape_codes() {
        let options = sample();
        assert!(!Printer::new(&options).help().contains('\x1b'));
    }
}
