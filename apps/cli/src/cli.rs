use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Convert text from one currency to another using current exchange rates.
#[derive(Parser, Debug, Clone)]
#[command(name = "fxtext", version, about)]
#[command(group(ArgGroup::new("input").required(true).args(["text", "file"])))]
pub struct Args {
    /// Text that you would like to convert.
    #[arg(short = 't', long)]
    pub text: Option<String>,

    /// File containing the message you would like to convert.
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Name of the output file.
    #[arg(short = 'o', long = "output-file", default_value = "output.txt")]
    pub output_file: PathBuf,

    /// ISO 4217 code of the currency the text is written in.
    #[arg(short = 'F', long, default_value = "USD")]
    pub from: String,

    /// ISO 4217 code of the currency to convert to.
    #[arg(short = 'c', long)]
    pub currency: String,

    /// Also match currency names written in lower or mixed case.
    #[arg(long)]
    pub ignore_case: bool,

    /// Print the converted text instead of writing the output file.
    #[arg(long)]
    pub stdout: bool,
}

impl Args {
    pub fn from_code(&self) -> String {
        self.from.trim().to_uppercase()
    }

    pub fn to_code(&self) -> String {
        self.currency.trim().to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input() {
        let args = Args::try_parse_from(["fxtext", "-t", "$5", "-c", "eur"]).unwrap();
        assert_eq!(args.text.as_deref(), Some("$5"));
        assert_eq!(args.from_code(), "USD");
        assert_eq!(args.to_code(), "EUR");
        assert_eq!(args.output_file, PathBuf::from("output.txt"));
        assert!(!args.ignore_case);
        assert!(!args.stdout);
    }

    #[test]
    fn test_file_input_with_options() {
        let args = Args::try_parse_from([
            "fxtext",
            "--file",
            "in.txt",
            "--from",
            "gbp",
            "--currency",
            "JPY",
            "--output-file",
            "out.txt",
            "--ignore-case",
            "--stdout",
        ])
        .unwrap();
        assert_eq!(args.file, Some(PathBuf::from("in.txt")));
        assert_eq!(args.from_code(), "GBP");
        assert_eq!(args.output_file, PathBuf::from("out.txt"));
        assert!(args.ignore_case);
        assert!(args.stdout);
    }

    #[test]
    fn test_text_and_file_are_exclusive() {
        let result = Args::try_parse_from(["fxtext", "-t", "$5", "-f", "in.txt", "-c", "EUR"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["fxtext", "-c", "EUR"]).is_err());
    }

    #[test]
    fn test_target_currency_is_required() {
        assert!(Args::try_parse_from(["fxtext", "-t", "$5"]).is_err());
    }
}
