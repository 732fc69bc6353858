use oui_convert::{convert, reader_builder};
use std::io;

const INPUT_FILE: &str = "oui.csv";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rdr = reader_builder().from_path(INPUT_FILE)?;

    let stdout = io::stdout();
    convert(rdr, stdout.lock())?;

    Ok(())
}
