/// parse configuration documents with structure like
/// " section1 key1: value1, value2 key2: value3 section2 key3: value4" which has section titles and
/// pairs key-vector of values. A template lists the expected sections and keys; every key of the
/// template missing from the document comes back as `None`.
///
/// Lines starting with `//`, `#`, `%` or `;` are comments.
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::{map, map_res, recognize},
    multi::{many0, many1, separated_list0},
    sequence::{delimited, pair, separated_pair, terminated},
};
use std::collections::HashMap;
use std::fmt;

pub type SectionMap = HashMap<String, Option<Vec<ConfigValue>>>;
pub type ConfigDocument = HashMap<String, SectionMap>;

/// one value of a configuration key
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    String(String),
    Float(f64),
    Integer(i64),
    Boolean(bool),
}

impl ConfigValue {
    pub fn as_string(&self) -> Option<&String> {
        if let ConfigValue::String(s) = self {
            Some(s)
        } else {
            None
        }
    }
    /// integers are accepted where a float is expected: `x_min: -10`
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            ConfigValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let ConfigValue::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        if let ConfigValue::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::String(s) => write!(f, "{}", s),
            ConfigValue::Float(val) => write!(f, "{}", val),
            ConfigValue::Integer(val) => write!(f, "{}", val),
            ConfigValue::Boolean(val) => write!(f, "{}", val),
        }
    }
}

/// identifier: letter or underscore, then letters, digits, underscores
fn identifier(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    map(parser, String::from).parse(input)
}

fn parse_title(input: &str) -> IResult<&str, String> {
    let (input, result) = identifier(input)?;
    Ok((input.trim(), result))
}

fn parse_value(input: &str) -> IResult<&str, ConfigValue> {
    // a single value ends at a comma, whitespace or semicolon
    let value_parser = take_while1(|c: char| !matches!(c, ',' | ' ' | '\t' | '\n' | '\r' | ';'));
    let mut value_parser = map_res(value_parser, |s: &str| -> Result<ConfigValue, String> {
        if let Ok(val) = s.parse::<i64>() {
            Ok(ConfigValue::Integer(val))
        } else if let Ok(val) = s.parse::<f64>() {
            Ok(ConfigValue::Float(val))
        } else if let Ok(val) = s.parse::<bool>() {
            Ok(ConfigValue::Boolean(val))
        } else {
            Ok(ConfigValue::String(s.to_string()))
        }
    });
    value_parser.parse(input)
}

fn parse_value_list(input: &str) -> IResult<&str, Vec<ConfigValue>> {
    let (input, _) = space0(input)?;
    let separator_coma = delimited(space0, tag(","), space0);
    separated_list0(separator_coma, parse_value).parse(input)
}

fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Vec<ConfigValue>)> {
    let colon_separator = delimited(space0, tag(":"), space0);
    let (input, result) =
        separated_pair(identifier, colon_separator, parse_value_list).parse(input)?;
    Ok((input.trim(), result))
}

fn parse_section(input: &str) -> IResult<&str, (String, HashMap<String, Vec<ConfigValue>>)> {
    let (input, _) = space0(input)?;
    let (input, title) = parse_title(input)?;
    let (input, _) = multispace0(input)?;
    let (input, pairs) = many1(terminated(parse_key_value_pair, space0)).parse(input)?;
    Ok((input, (title, pairs.into_iter().collect())))
}

/// Drops comment lines and blank lines
pub fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("//")
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('%')
                && !trimmed.starts_with(';')
                && !trimmed.is_empty()
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Parses the sections of an already comment-free document
pub fn parse_document(input: &str) -> IResult<&str, ConfigDocument> {
    let mut parser = many1(delimited(space0, parse_section, multispace0));
    let (input, sections) = parser.parse(input)?;

    let mut result = HashMap::new();
    for (title, section) in sections {
        let title_map: SectionMap = section
            .into_iter()
            .map(|(key, values)| (key, Some(values)))
            .collect();
        result.insert(title, title_map);
    }
    Ok((input, result))
}

/// Parses a whole document (comments allowed) and merges it with the template:
/// every section and key of the template exists in the result.
pub fn parse_config_document(
    input: &str,
    template: &HashMap<String, Vec<String>>,
) -> Result<ConfigDocument, String> {
    let filtered = filter_comments(input);
    let mut parsed = if filtered.trim().is_empty() {
        HashMap::new()
    } else {
        let (remaining, parsed) =
            parse_document(&filtered).map_err(|e| format!("Parsing error: {:?}", e))?;
        if !remaining.trim().is_empty() {
            return Err(format!(
                "Failed to parse entire document. Remaining: '{}'",
                remaining
            ));
        }
        parsed
    };

    for (title, keys) in template {
        let section_map = parsed.entry(title.clone()).or_default();
        for key in keys {
            section_map.entry(key.clone()).or_insert(None);
        }
    }
    Ok(parsed)
}
