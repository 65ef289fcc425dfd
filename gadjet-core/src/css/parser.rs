use cssparser::*;

use crate::css::{self, Rule};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CustomParseError {
    EmptyValue,
    BlockInValue,
    EmptySelector,
}

/// Flattens nested CSS into plain rules, in source order.
///
/// Items that fail to parse are logged and skipped.
pub fn flatten(css: &str) -> Vec<Rule> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    BlockParser { selectors: &[], conditions: &[] }.parse_body(&mut parser)
}

enum Item {
    Declaration(String, String),
    Rules(Vec<Rule>),
}

enum AtPrelude {
    /// `@media ...` or `@supports ...`, wrapping the nested rules.
    Condition(String),

    /// Any other at-rule, kept as written.
    Verbatim(String),
}

/// Parses the contents of one block. `selectors` is empty at the top level.
struct BlockParser<'a> {
    selectors: &'a [String],
    conditions: &'a [String],
}

impl BlockParser<'_> {
    fn parse_body<'i>(&mut self, parser: &mut Parser<'i, '_>) -> Vec<Rule> {
        let mut declarations = Vec::new();
        let mut nested = Vec::new();

        for result in RuleBodyParser::new(parser, self) {
            match result {
                Ok(Item::Declaration(name, value)) => declarations.push((name, value)),
                Ok(Item::Rules(rules)) => nested.extend(rules),
                Err((error, text)) => {
                    let base_msg = match error.kind {
                        ParseErrorKind::Custom(CustomParseError::EmptyValue) => "Empty CSS value",
                        ParseErrorKind::Custom(CustomParseError::EmptySelector) => "Empty CSS selector",
                        _ => "Failed to parse CSS",
                    };
                    let snippet = text.lines().next().unwrap_or("").trim();
                    css::log_error(format_args!("{base_msg}: `{snippet}`"), error.location);
                }
            }
        }

        if declarations.is_empty() {
            return nested;
        }

        if self.selectors.is_empty() {
            log::error!("Dropped {} CSS declaration(s) outside of any rule", declarations.len());
            return nested;
        }

        let mut rules = Vec::with_capacity(nested.len() + 1);
        rules.push(Rule::Style {
            conditions: self.conditions.to_vec(),
            selectors: self.selectors.to_vec(),
            declarations,
        });
        rules.extend(nested);
        rules
    }
}

impl<'i> RuleBodyItemParser<'i, Item, CustomParseError> for BlockParser<'_> {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        true
    }
}

impl<'i> DeclarationParser<'i> for BlockParser<'_> {
    type Declaration = Item;
    type Error = CustomParseError;

    fn parse_value<'t>(&mut self, name: CowRcStr<'i>, parser: &mut Parser<'i, '_>, _: &ParserState) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        parser.skip_whitespace();
        let start = parser.position();
        // A `{}` block means this is really a nested rule such as `a:hover { ... }`.
        consume_value(parser, false)?;
        let value = collapse(parser.slice_from(start));
        if value.is_empty() {
            return Err(parser.new_custom_error(CustomParseError::EmptyValue));
        }
        Ok(Item::Declaration(name.to_string(), value))
    }
}

impl<'i> QualifiedRuleParser<'i> for BlockParser<'_> {
    type Prelude = Vec<String>;
    type QualifiedRule = Item;
    type Error = CustomParseError;

    fn parse_prelude<'t>(&mut self, parser: &mut Parser<'i, '_>) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        parser.parse_comma_separated(|parser| {
            let start = parser.position();
            while parser.next_including_whitespace().is_ok() {}
            let selector = collapse(parser.slice_from(start));
            if selector.is_empty() {
                return Err(parser.new_custom_error(CustomParseError::EmptySelector));
            }
            Ok(selector)
        })
    }

    fn parse_block<'t>(&mut self, prelude: Self::Prelude, _: &ParserState, parser: &mut Parser<'i, '_>) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let selectors = resolve(self.selectors, &prelude);
        let mut nested = BlockParser {
            selectors: &selectors,
            conditions: self.conditions,
        };
        Ok(Item::Rules(nested.parse_body(parser)))
    }
}

impl<'i> AtRuleParser<'i> for BlockParser<'_> {
    type Prelude = AtPrelude;
    type AtRule = Item;
    type Error = CustomParseError;

    fn parse_prelude<'t>(&mut self, name: CowRcStr<'i>, parser: &mut Parser<'i, 't>) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let name: &str = &name;
        let start = parser.position();
        consume_value(parser, true)?;
        let prelude = collapse(parser.slice_from(start));
        let head = if prelude.is_empty() { format!("@{name}") } else { format!("@{name} {prelude}") };

        Ok(match_ignore_ascii_case! { name,
            "media" | "supports" => AtPrelude::Condition(head),
            _ => AtPrelude::Verbatim(head),
        })
    }

    fn rule_without_block(&mut self, prelude: Self::Prelude, _: &ParserState) -> Result<Self::AtRule, ()> {
        match prelude {
            AtPrelude::Verbatim(head) => Ok(Item::Rules(vec![Rule::Verbatim {
                conditions: self.conditions.to_vec(),
                text: format!("{head};"),
            }])),
            AtPrelude::Condition(_) => Err(()),
        }
    }

    fn parse_block<'t>(&mut self, prelude: Self::Prelude, _: &ParserState, parser: &mut Parser<'i, 't>) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        match prelude {
            AtPrelude::Condition(condition) => {
                let mut conditions = self.conditions.to_vec();
                conditions.push(condition);
                let mut nested = BlockParser {
                    selectors: self.selectors,
                    conditions: &conditions,
                };
                Ok(Item::Rules(nested.parse_body(parser)))
            }
            AtPrelude::Verbatim(head) => {
                let start = parser.position();
                consume_value(parser, true)?;
                let body = collapse(parser.slice_from(start));
                Ok(Item::Rules(vec![Rule::Verbatim {
                    conditions: self.conditions.to_vec(),
                    text: format!("{head} {{ {body} }}"),
                }]))
            }
        }
    }
}

fn consume_value<'i>(parser: &mut Parser<'i, '_>, allow_curly: bool) -> Result<(), ParseError<'i, CustomParseError>> {
    while let Ok(token) = parser.next_including_whitespace() {
        match token {
            Token::CurlyBracketBlock if !allow_curly => {
                return Err(parser.new_custom_error(CustomParseError::BlockInValue));
            }
            Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock | Token::CurlyBracketBlock => {
                parser.parse_nested_block(|p| consume_value(p, allow_curly))?;
            }
            _ => {}
        }
    }
    Ok(())
}

/// Combines nested selectors with their parents. `&` stands for the parent, otherwise the child is a descendant.
fn resolve(parents: &[String], selectors: &[String]) -> Vec<String> {
    if parents.is_empty() {
        return selectors.to_vec();
    }

    let mut resolved = Vec::with_capacity(parents.len() * selectors.len());
    for parent in parents {
        for selector in selectors {
            if selector.contains('&') {
                resolved.push(selector.replace('&', parent));
            } else {
                resolved.push(format!("{parent} {selector}"));
            }
        }
    }
    resolved
}

/// Trims and collapses runs of whitespace to a single space.
fn collapse(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
