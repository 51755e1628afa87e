use clap::Parser;

const LONG_ABOUT: &str = "\
Interactive terminal menu for creating, viewing, updating and deleting customer records.

Configuration is read from an optional custdesk.toml in the working directory and
from the environment:

  CUSTDESK_DATABASE_URI   memory:// or file://<path> (required)
  CUSTDESK_LOGGER_LEVEL   TRACE, DEBUG, INFO, WARN or ERROR; Info or info also work (default WARN)";

#[derive(Parser, Debug)]
#[command(name = "custdesk", version)]
#[command(about = "Interactive terminal menu for customer records", long_about = LONG_ABOUT)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn takes_no_arguments() {
        Cli::command().debug_assert();
        assert!(Cli::try_parse_from(["custdesk"]).is_ok());
        assert!(Cli::try_parse_from(["custdesk", "create"]).is_err());
        assert!(Cli::try_parse_from(["custdesk", "--global"]).is_err());
    }
}
