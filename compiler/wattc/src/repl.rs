//! Line-oriented front end over a [`Session`].
//!
//! Lines starting with `.` are commands; anything else is a program.

use watt_ir::printer::{dump_expr, parenthesize_expr};
use watt_value::render_type;

use crate::{Session, WattError};

pub const HELP: &str = "\
.help          show this list
.exit          leave
.clear         forget everything bound so far
.ast <expr>    print the syntax tree of an expression
.parens <expr> print an expression with its grouping made explicit
.type <expr>   print the type of an expression
.undef <name>  forget the value of a name, keeping its type";

/// One input line, classified.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    Exit,
    Clear,
    Ast(&'a str),
    Parens(&'a str),
    Type(&'a str),
    Undef(&'a str),
    Eval(&'a str),
    Unknown(&'a str),
}

pub fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    let Some(command) = line.strip_prefix('.') else {
        return Command::Eval(line);
    };
    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };
    match name {
        "help" => Command::Help,
        "exit" | "quit" => Command::Exit,
        "clear" => Command::Clear,
        "ast" => Command::Ast(arg),
        "parens" => Command::Parens(arg),
        "type" => Command::Type(arg),
        "undef" => Command::Undef(arg),
        _ => Command::Unknown(name),
    }
}

/// What to show after handling a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Silent,
    Error(String),
    Exit,
}

pub struct Repl {
    session: Session,
    color: bool,
}

impl Repl {
    pub fn new(session: Session, color: bool) -> Self {
        Repl { session, color }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn handle(&mut self, line: &str) -> Reply {
        let command = parse_command(line);
        tracing::debug!(?command, "repl");
        match command {
            Command::Help => Reply::Output(HELP.to_string()),
            Command::Exit => Reply::Exit,
            Command::Clear => {
                self.session.reset();
                Reply::Silent
            }
            Command::Ast(source) => match watt_parse::parse_expression(source) {
                Ok(parsed) => {
                    let tree = dump_expr(&parsed.arena, parsed.root);
                    Reply::Output(tree.trim_end().to_string())
                }
                Err(err) => self.error(source, err.into()),
            },
            Command::Parens(source) => match watt_parse::parse_expression(source) {
                Ok(parsed) => Reply::Output(parenthesize_expr(&parsed.arena, parsed.root)),
                Err(err) => self.error(source, err.into()),
            },
            Command::Type(source) => match self.session.type_of(source) {
                Ok(ty) => Reply::Output(render_type(&ty).to_string()),
                Err(err) => self.error(source, err),
            },
            Command::Undef(name) => {
                if self.session.undef(name) {
                    Reply::Silent
                } else {
                    Reply::Error(format!("'{name}' is not defined"))
                }
            }
            Command::Eval("") => Reply::Silent,
            Command::Eval(source) => match self.session.run(source) {
                Ok(Some(value)) => Reply::Output(value.to_string()),
                Ok(None) => Reply::Silent,
                Err(err) => self.error(source, err),
            },
            Command::Unknown(name) => {
                Reply::Error(format!("unknown command '.{name}', try .help"))
            }
        }
    }

    fn error(&self, source: &str, err: WattError) -> Reply {
        Reply::Error(err.render(source, self.color))
    }
}
