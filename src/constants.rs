// src/constants.rs

/// Output file for the merge where the first input contributes the first line of each pair.
pub const FILE1_PRIORITY_OUTPUT: &str = "output_file1_priority.txt";

/// Output file for the merge where the second input contributes the first line of each pair.
pub const FILE2_PRIORITY_OUTPUT: &str = "output_file2_priority.txt";

/// Label shown for the file-type filter of the selection prompts.
pub const TEXT_FILTER_LABEL: &str = "Text Files (*.txt)";

/// Extensions accepted by the selection prompts (compared case-insensitively).
pub const TEXT_FILTER_EXTENSIONS: &[&str] = &["txt"];

/// Title of the prompt for the first input file.
pub const FIRST_PROMPT_TITLE: &str = "Select First Input File";

/// Title of the prompt for the second input file.
pub const SECOND_PROMPT_TITLE: &str = "Select Second Input File";
