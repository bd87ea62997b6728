use std::io::Write;

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer};

use crate::presence::Presence;

/// Writes `presence` as JSON indented by four spaces, followed by a newline.
pub fn write_report<W: Write>(mut writer: W, presence: &Presence) -> anyhow::Result<()> {
    let mut serializer =
        Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    presence.serialize(&mut serializer)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
