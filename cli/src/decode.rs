use clap::Args;
use serde::Serialize;
use utf16::Text;

use crate::error::Result;
use crate::output::{OutputFormat, render};
use crate::utils::{parse_code_units, read_input};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to a file of code units. If neither this nor --units is given, reads from stdin
    #[arg(conflicts_with = "units")]
    file: Option<String>,

    /// Code units separated by commas or whitespace (e.g. "55358,57052")
    #[arg(short, long, allow_hyphen_values = true)]
    units: Option<String>,

    /// Fail on unpaired surrogates instead of printing U+FFFD
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

#[derive(Serialize)]
struct Decoded<'a> {
    text: &'a Text,
    length: usize,
    unpaired_surrogates: bool,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input = match config.units {
        Some(units) => units,
        None => String::from_utf8(read_input(config.file.as_deref())?)?,
    };

    let units = parse_code_units(&input)?;
    let text = utf16::decode(&units);
    tracing::debug!(units = text.len(), "decoded input");

    if config.strict {
        text.to_string_checked()?;
    }

    let decoded = Decoded {
        text: &text,
        length: text.len(),
        unpaired_surrogates: text.has_unpaired_surrogates(),
    };
    match render(config.output, &decoded)? {
        Some(rendered) => println!("{rendered}"),
        None => println!("{text}"),
    }

    Ok(())
}
