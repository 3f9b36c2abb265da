use chrono::NaiveDate;
use clap::{Parser, command};

use crate::models::DEFAULT_AVATAR_BASE;

#[derive(Parser)]
#[command(about = "Print ages and avatar URLs for the sample people")]
pub struct Args {
    /// Reference date for computing ages (YYYY-MM-DD), defaults to today
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Prefix the avatar URLs are built from
    #[arg(long, value_name = "URL", default_value = DEFAULT_AVATAR_BASE)]
    pub avatar_base: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_defaults() {
        let args = Args::try_parse_from(["peoplers"]).unwrap();
        assert_eq!(args.as_of, None);
        assert_eq!(args.avatar_base, DEFAULT_AVATAR_BASE);
    }

    #[test]
    fn parses_reference_date() {
        let args = Args::try_parse_from(["peoplers", "--as-of", "2024-05-01"]).unwrap();
        assert_eq!(args.as_of, NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[test]
    fn rejects_malformed_reference_date() {
        assert!(Args::try_parse_from(["peoplers", "--as-of", "01/05/2024"]).is_err());
    }
}
