//! Display functions for command results

use super::formatters::{
    format_cell_header, format_cell_words, format_partition_summary, format_record,
};
use crate::analysis::{AnalysisRecord, Partition, Rankings};
use crate::commands::BestGuessResult;
use colored::Colorize;

/// Print the four ranked lists under their headings
pub fn print_rankings(rankings: &Rankings) {
    for (title, records) in rankings.sections() {
        println!("\n{}", title.bright_cyan().bold());
        for record in records {
            println!("{}", format_record(record));
        }
    }
}

/// Print every cell of every partition, then that guess's scores
pub fn print_partitions(partitions: &[Partition]) {
    for partition in partitions {
        for (hint, words) in partition.cells() {
            println!(
                "{}",
                format_cell_header(partition.guess(), hint, words.len()).yellow()
            );
            println!("{}", format_cell_words(words));
        }
        if let Some(record) = AnalysisRecord::from_partition(partition) {
            println!("{}", format_partition_summary(&record).bright_black());
        }
    }
}

/// Print the result of a ranking run
pub fn print_best_guess_result(result: &BestGuessResult) {
    if let Some(partitions) = &result.partitions {
        print_partitions(partitions);
    }
    print_rankings(&result.rankings);
}
