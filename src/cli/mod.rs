use clap::Parser;
use std::path::PathBuf;

/// Directory structure analyzer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The directory to analyze.
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// The report file to create. Its extension selects the output format:
    /// docx, xlsx, pdf, csv or json.
    #[arg(short, long, default_value = "./report.pdf")]
    pub report: PathBuf,
}

/// Parses the command-line arguments.
pub fn run() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["katalog"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert_eq!(args.report, PathBuf::from("./report.pdf"));
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["katalog", "-p", "/srv/data", "-r", "out/report.csv"]);
        assert_eq!(args.path, PathBuf::from("/srv/data"));
        assert_eq!(args.report, PathBuf::from("out/report.csv"));
    }
}
