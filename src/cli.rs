// src/cli.rs

use clap::Parser;

/// Strips blank lines from two text files and interleaves them.
///
/// Both input files are rewritten in place without their blank lines. Two
/// merges are then written: `output_file1_priority.txt`, where each pair starts
/// with a line of the first file, and `output_file2_priority.txt`, where it
/// starts with a line of the second. Every pair is followed by a blank line.
///
/// Input files not given on the command line are asked for interactively.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// First input file. Prompted for if omitted.
    #[arg(value_name = "FILE1")]
    pub first_input: Option<String>,

    /// Second input file. Prompted for if omitted.
    #[arg(value_name = "FILE2")]
    pub second_input: Option<String>,

    /// Directory the two merged files are written to [default: current directory].
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<String>,
}
