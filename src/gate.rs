// Command bodies for the CLI. Everything here goes through sniffgate-core; the binary
// only adds file plumbing and presentation.
use std::fs::File;
use std::io::{self, BufReader, Read};

use anyhow::Context;
use owo_colors::OwoColorize;
use sniffgate_core::prelude::*;

/// How much of a file to sample for `info`. Plenty for every signature the classifier
/// knows.
const SAMPLE_SIZE: u64 = 8192;

pub(crate) fn identify_file(input: &str) -> anyhow::Result<()> {
    let file = File::open(input).with_context(|| format!("Unable to open {input}"))?;

    let mut sample = Vec::with_capacity(SAMPLE_SIZE as usize);
    file.take(SAMPLE_SIZE)
        .read_to_end(&mut sample)
        .with_context(|| format!("Unable to read {input}"))?;

    let media = classify(&sample);
    println!("{input}: {media} (.{})", media.extension());
    Ok(())
}

pub(crate) fn check_file(input: &str, allow: &[String]) -> anyhow::Result<()> {
    anyhow::ensure!(!allow.is_empty(), "At least one --allow pattern is required");

    let file = File::open(input).with_context(|| format!("Unable to open {input}"))?;
    let mut reader = SniffReader::new(BufReader::new(file), allow.iter().map(String::as_str));

    match io::copy(&mut reader, &mut io::sink()) {
        Ok(length) => {
            let media = reader.media_type().map_or("no data", |media| media.as_str());
            println!("{input}: {} ({media}, {length} bytes)", "allowed".green());
            Ok(())
        }
        Err(error) => {
            if sniff::Error::from_io(&error).is_some() {
                println!("{input}: {} ({error})", "rejected".red());
                std::process::exit(1);
            }
            Err(error).with_context(|| format!("Unable to read {input}"))
        }
    }
}

pub(crate) fn copy_file(input: &str, output: &str, allow: &[String]) -> anyhow::Result<()> {
    anyhow::ensure!(!allow.is_empty(), "At least one --allow pattern is required");

    let source = File::open(input).with_context(|| format!("Unable to open {input}"))?;
    let mut reader =
        ClosingSniffReader::new(BufReader::new(source), allow.iter().map(String::as_str));
    let mut destination =
        File::create(output).with_context(|| format!("Unable to create {output}"))?;

    match io::copy(&mut reader, &mut destination) {
        Ok(length) => {
            reader.close().with_context(|| format!("Unable to close {input}"))?;
            log::info!("Copied {length} bytes from {input} to {output}");

            let media = reader.media_type().map_or("no data", |media| media.as_str());
            println!("{output}: {} ({media}, {length} bytes)", "written".green());
            Ok(())
        }
        Err(error) => {
            // Rejected or failed content is not kept around as a partial file.
            drop(destination);
            if let Err(remove_error) = std::fs::remove_file(output) {
                log::warn!("Unable to remove partial output {output}: {remove_error}");
            }
            if let Err(close_error) = reader.close() {
                log::warn!("Unable to close {input}: {close_error}");
            }

            if sniff::Error::from_io(&error).is_some() {
                println!("{input}: {} ({error})", "rejected".red());
                std::process::exit(1);
            }
            Err(error).with_context(|| format!("Unable to copy {input} to {output}"))
        }
    }
}
