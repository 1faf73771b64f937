use std::{env, fs::read_to_string, path::PathBuf, process, rc::Rc, time::Instant};

use geoparse::{display_error, lexer::lexer::tokenize, parser::parser::Parser};
use log::info;

const DEMO_SOURCE: &str = "'hello' + 2 * (34 - 1) + 3";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [file]", args[0]);
        process::exit(2);
    }

    let (file_name, source) = match args.get(1) {
        Some(file_path) => {
            let path = PathBuf::from(file_path);
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| file_path.clone());

            match read_to_string(&path) {
                Ok(contents) => (file_name, contents),
                Err(err) => {
                    eprintln!("Failed to read {}: {}", path.display(), err);
                    process::exit(1);
                }
            }
        }
        None => {
            info!("no input file given, parsing the demo expression");
            (String::from("shell"), String::from(DEMO_SOURCE))
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source);
            process::exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());
    for token in &tokens {
        token.debug();
    }

    let parse_start = Instant::now();
    let mut parser = Parser::new(Rc::new(file_name));

    if let Err(error) = parser.parse(tokens) {
        display_error(&error, &source);
        process::exit(1);
    }

    println!("Parsed in {:?}", parse_start.elapsed());

    if let Err(err) = parser.dump() {
        eprintln!("Failed to write the tree: {}", err);
        process::exit(1);
    }

    println!("Total time: {:?}", start.elapsed());
}
