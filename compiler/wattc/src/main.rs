//! watt command line.

use std::io::{BufRead, IsTerminal, Write};

use wattc::repl::{Repl, Reply};
use wattc::Session;

fn main() {
    wattc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let no_prelude = args.iter().any(|arg| arg == "--no-prelude");
    let rest: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|arg| *arg != "--no-prelude")
        .collect();

    let session = if no_prelude {
        Session::new()
    } else {
        Session::with_prelude()
    };

    match rest.as_slice() {
        [] => repl(session),
        ["run", path] => run_file(session, path),
        ["check", path] => check_file(&session, path),
        ["help" | "--help" | "-h"] => print_usage(),
        [command, ..] if *command == "run" || *command == "check" => {
            eprintln!("Usage: watt {command} <file.watt>");
            std::process::exit(1);
        }
        [other, ..] => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("watt: a language for quantities with units");
    println!();
    println!("Usage: watt [--no-prelude] [command]");
    println!();
    println!("Commands:");
    println!("  (none)             Start the interactive prompt");
    println!("  run <file.watt>    Check and evaluate a file, printing the last value");
    println!("  check <file.watt>  Type-check a file, printing the last type");
    println!("  help               Show this message");
    println!();
    println!("Options:");
    println!("  --no-prelude       Start without the built-in units m, s, km, min, h");
}

fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

fn read_source(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read '{path}': {err}");
            std::process::exit(1);
        }
    }
}

fn run_file(mut session: Session, path: &str) {
    let source = read_source(path);
    match session.run(&source) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {}
        Err(err) => {
            eprint!("{}", err.render(&source, use_color()));
            std::process::exit(1);
        }
    }
}

fn check_file(session: &Session, path: &str) {
    let source = read_source(path);
    match session.check(&source) {
        Ok(Some(ty)) => println!("{}", watt_value::render_type(&ty)),
        Ok(None) => {}
        Err(err) => {
            eprint!("{}", err.render(&source, use_color()));
            std::process::exit(1);
        }
    }
}

fn repl(session: Session) {
    let mut repl = Repl::new(session, use_color());
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        let _ = stdout.flush();
        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }

        match repl.handle(&line) {
            Reply::Output(text) => println!("{text}"),
            Reply::Silent => {}
            Reply::Error(text) => eprintln!("{}", text.trim_end()),
            Reply::Exit => break,
        }
    }
}
