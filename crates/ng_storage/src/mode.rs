use std::fmt;
use std::str::FromStr;

use ng_core::Error;

/// Which database a run writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseMode {
    Dev,
    Prod,
    Testing,
}

impl DatabaseMode {
    pub fn database_name(&self) -> &'static str {
        match self {
            DatabaseMode::Dev => "dev",
            DatabaseMode::Prod => "prod",
            DatabaseMode::Testing => "testing",
        }
    }
}

impl fmt::Display for DatabaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.database_name())
    }
}

impl FromStr for DatabaseMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(DatabaseMode::Dev),
            "prod" => Ok(DatabaseMode::Prod),
            "testing" => Ok(DatabaseMode::Testing),
            other => Err(Error::InvalidInput(format!(
                "unknown database mode '{}'. Expected one of: dev, prod, testing",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!("dev".parse::<DatabaseMode>().unwrap().database_name(), "dev");
        assert_eq!("prod".parse::<DatabaseMode>().unwrap(), DatabaseMode::Prod);
        assert_eq!("testing".parse::<DatabaseMode>().unwrap(), DatabaseMode::Testing);
        assert!("staging".parse::<DatabaseMode>().is_err());
        assert!("Dev".parse::<DatabaseMode>().is_err());
    }
}
