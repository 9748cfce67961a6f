use clap::Args;
use serde::Serialize;
use utf16::{CodeUnits, Text, WidthSelector};

use crate::error::Result;
use crate::output::{OutputFormat, render};
use crate::utils::{format_code_units, read_input};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to a UTF-8 text file. If neither this nor --text is given, reads from stdin
    #[arg(conflicts_with = "text")]
    file: Option<String>,

    /// Text to encode
    #[arg(short, long)]
    text: Option<String>,

    /// Output container: generic, 8, 16 or 32
    #[arg(short, long, default_value = "generic")]
    width: WidthSelector,

    /// Keep the trailing line ending of file or stdin input
    #[arg(long)]
    keep_newline: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

#[derive(Serialize)]
struct Encoded<'a> {
    width: String,
    length: usize,
    units: &'a CodeUnits,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = match config.text {
        Some(text) => text,
        None => {
            let contents = String::from_utf8(read_input(config.file.as_deref())?)?;
            if config.keep_newline {
                contents
            } else {
                strip_line_ending(contents)
            }
        }
    };

    let units = utf16::encode(&Text::from(input), config.width);
    tracing::debug!(units = units.len(), width = %config.width, "encoded input");

    let encoded = Encoded {
        width: config.width.to_string(),
        length: units.len(),
        units: &units,
    };
    match render(config.output, &encoded)? {
        Some(rendered) => println!("{rendered}"),
        None => println!("{}", format_code_units(&units)),
    }

    Ok(())
}

fn strip_line_ending(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::encode::strip_line_ending;

    #[rstest(
        input,
        expected,
        case("asdf\n", "asdf"),
        case("asdf\r\n", "asdf"),
        case("asdf\n\n", "asdf\n"),
        case("asdf", "asdf"),
        case("", "")
    )]
    fn test_strip_line_ending(input: &str, expected: &str) {
        assert_eq!(expected, strip_line_ending(input.to_string()));
    }
}
