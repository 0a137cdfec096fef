use crate::domain::model::{Criterion, StartupSubmission};
use crate::utils::error::{RankError, Result};

/// One line of input to an interactive session.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(StartupSubmission),
    Import(String),
    Remove(String),
    Weight(Criterion, f64),
    Industries(Vec<String>),
    Stages(Vec<String>),
    Locations(Vec<String>),
    ArrRange(i64, i64),
    EmployeeRange(i64, i64),
    Show,
    Names,
    Options,
    Criteria,
    Export(String),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  add <name> | <description> | <industry> | <stage> | <arr> | <employees> | <location>
  import <file.csv>              append startups from a CSV file
  remove <name>                  remove every startup with this name
  weight <criterion> <value>     industry, stage, arr, employees, location
  industries <a,b,...>           acceptable industries (empty clears)
  stages <a,b,...>               acceptable stages
  locations <a,b,...>            acceptable locations
  arr <min> <max>                acceptable ARR range (inclusive)
  employees <min> <max>          acceptable employee count range (inclusive)
  show                           print the ranked table
  names                          list startup names
  options                        list known industries, stages and locations
  criteria                       print current criteria and weights
  export <path>                  write the ranked table (format from extension)
  help                           show this message
  quit                           leave the session";

fn command_error(message: impl Into<String>) -> RankError {
    RankError::CommandError {
        message: message.into(),
    }
}

fn parse_list(args: &str) -> Vec<String> {
    args.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_range(keyword: &str, args: &str) -> Result<(i64, i64)> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(command_error(format!("usage: {} <min> <max>", keyword)));
    }

    let parse = |value: &str| {
        value
            .replace('_', "")
            .parse::<i64>()
            .map_err(|_| command_error(format!("'{}' is not an integer", value)))
    };
    Ok((parse(parts[0])?, parse(parts[1])?))
}

/// Blank or unparseable fields become `None`; the registry decides what to keep.
fn parse_add(args: &str) -> Result<StartupSubmission> {
    let fields: Vec<&str> = args.split('|').map(str::trim).collect();
    if fields.len() != 7 {
        return Err(command_error(
            "usage: add <name> | <description> | <industry> | <stage> | <arr> | <employees> | <location>",
        ));
    }

    let text = |value: &str| Some(value.to_string()).filter(|v| !v.is_empty());
    let count = |value: &str| value.replace([',', '_'], "").parse::<u64>().ok();

    Ok(StartupSubmission {
        name: text(fields[0]),
        description: text(fields[1]),
        industry: text(fields[2]),
        stage: text(fields[3]),
        arr: count(fields[4]),
        employees: count(fields[5]),
        location: text(fields[6]),
    })
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_start().trim_end_matches(['\r', '\n']);
        // raw 只去掉關鍵字後的一個分隔字元，名稱前後的空白保留
        let (keyword, raw) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let args = raw.trim();

        let require_arg = |usage: &str| {
            if args.is_empty() {
                Err(command_error(format!("usage: {}", usage)))
            } else {
                Ok(args.to_string())
            }
        };

        match keyword.to_ascii_lowercase().as_str() {
            "add" => Ok(Command::Add(parse_add(args)?)),
            "import" => Ok(Command::Import(require_arg("import <file.csv>")?)),
            "remove" if raw.trim().is_empty() => Err(command_error("usage: remove <name>")),
            "remove" => Ok(Command::Remove(raw.to_string())),
            "weight" => {
                let (name, value) = args
                    .rsplit_once(char::is_whitespace)
                    .ok_or_else(|| command_error("usage: weight <criterion> <value>"))?;
                let criterion = Criterion::parse(name)
                    .ok_or_else(|| command_error(format!("unknown criterion '{}'", name.trim())))?;
                let value = value
                    .parse::<f64>()
                    .map_err(|_| command_error(format!("'{}' is not a number", value)))?;
                Ok(Command::Weight(criterion, value))
            }
            "industries" => Ok(Command::Industries(parse_list(args))),
            "stages" => Ok(Command::Stages(parse_list(args))),
            "locations" => Ok(Command::Locations(parse_list(args))),
            "arr" => {
                let (min, max) = parse_range("arr", args)?;
                Ok(Command::ArrRange(min, max))
            }
            "employees" => {
                let (min, max) = parse_range("employees", args)?;
                Ok(Command::EmployeeRange(min, max))
            }
            "show" | "rank" => Ok(Command::Show),
            "names" => Ok(Command::Names),
            "options" => Ok(Command::Options),
            "criteria" => Ok(Command::Criteria),
            "export" => Ok(Command::Export(require_arg("export <path>")?)),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Err(command_error("empty command")),
            other => Err(command_error(format!("unknown command '{}'", other))),
        }
    }

    /// Whether running this command changes the ranked view.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::Import(_)
                | Command::Remove(_)
                | Command::Weight(..)
                | Command::Industries(_)
                | Command::Stages(_)
                | Command::Locations(_)
                | Command::ArrRange(..)
                | Command::EmployeeRange(..)
        )
    }
}
