//! Command line flags.

use clap::Parser;

/// Split a check evenly between friends, tip included.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "wesplit", version, about)]
pub struct Cli {
    /// Check amount before tip, e.g. "42.50" or "$1,234.50"
    #[arg(short, long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Tip percentage, 0-100
    #[arg(short, long, value_name = "PERCENT")]
    pub tip: Option<u32>,

    /// Number of people, 2-99
    #[arg(short, long, value_name = "COUNT", conflicts_with = "people_index")]
    pub people: Option<u32>,

    /// People picker index, 0-97 (0 means 2 people)
    #[arg(long, value_name = "INDEX")]
    pub people_index: Option<u32>,

    /// Currency code for output, e.g. EUR (default: from locale, else USD)
    #[arg(short, long, value_name = "CODE")]
    pub currency: Option<String>,

    /// Print a JSON report instead of text
    #[arg(long, conflicts_with = "interactive")]
    pub json: bool,

    /// Edit the inputs at a prompt and watch the split update
    #[arg(short, long)]
    pub interactive: bool,

    /// List the selectable tip percentages and exit
    #[arg(long)]
    pub list_tips: bool,

    /// List the selectable people counts and exit
    #[arg(long)]
    pub list_people: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_one_shot_flags() {
        let cli = Cli::parse_from(["wesplit", "-a", "$100", "-t", "15", "-p", "4", "--json"]);
        assert_eq!(cli.amount.as_deref(), Some("$100"));
        assert_eq!(cli.tip, Some(15));
        assert_eq!(cli.people, Some(4));
        assert!(cli.json);
        assert!(!cli.interactive);
    }

    #[test]
    fn test_people_and_index_conflict() {
        let result = Cli::try_parse_from(["wesplit", "--people", "3", "--people-index", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_amount_reaches_validation() {
        let cli = Cli::parse_from(["wesplit", "--amount", "-5"]);
        assert_eq!(cli.amount.as_deref(), Some("-5"));
    }
}
