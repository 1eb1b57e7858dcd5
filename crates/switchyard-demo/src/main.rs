//! A small todo CLI showing the full switchyard surface: declaration,
//! parsing, typed read-back, help rendering, and subcommand dispatch.

use std::process::ExitCode;

use anyhow::Result;
use switchyard::{parse_argv, Argument, Argv, Builder, Flag, Options, Printer};

fn declare() -> Result<Options> {
    let options = Builder::new("todos", "keeps track of things to do")
        .flag(Flag::boolean("print usage and exit").short('h').long("help"))
        .flag(Flag::counting("raise verbosity, repeatable").short('v').long("verbose"))
        .argument(
            Argument::single::<String>("todo file to operate on")
                .short('f')
                .long("file")
                .label("FILE")
                .default("todos.txt".to_string()),
        )
        .subcommand(
            Builder::new("add", "adds an entry")
                .argument(Argument::single::<i64>("priority, 1 is highest").short('p').long("priority").label("INT").default(3))
                .argument(Argument::list::<String>("tags to attach").short('t').long("tag").label("TAG")),
        )
        .subcommand(
            Builder::new("list", "lists entries").flag(Flag::boolean("include finished entries").short('a').long("all")),
        )
        .subcommand(
            Builder::new("done", "marks an entry finished")
                .argument(Argument::single::<u64>("entry id").short('i').long("id").label("ID").required()),
        )
        .build()?;
    Ok(options)
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let mut options = declare()?;
    let argv = Argv::from_env();
    let result = parse_argv(&mut options, &argv);

    if let Some(error) = result.error {
        eprintln!("{error}");
        eprintln!("{}", Printer::new(&options).usage());
        return Ok(ExitCode::from(2));
    }

    if options.find_flag("help").unwrap().is_set() {
        println!("{}", Printer::new(&options).usage());
        println!();
        print!("{}", Printer::new(&options).styled(true).help());
        return Ok(ExitCode::SUCCESS);
    }

    let verbosity = options.find_counting_flag("verbose").unwrap().count();
    let file = options.typed_argument::<String>("file").unwrap().get().unwrap();
    if verbosity > 0 {
        eprintln!("using todo file {file}");
    }

    match result.subcommand_path.first().map(String::as_str) {
        Some("add") => {
            let add = options.find_subcommand("add").unwrap();
            let priority = add.typed_argument::<i64>("priority").unwrap().get().unwrap();
            let tags = add.typed_argument_list::<String>("tag").unwrap().get();
            let title = result.unparsed.join(" ");
            if title.is_empty() {
                eprintln!("nothing to add");
                return Ok(ExitCode::from(2));
            }
            println!("added \"{title}\" (priority {priority}, tags: {})", tags.join(", "));
        }
        Some("list") => {
            let all = options
                .find_subcommand("list")
                .unwrap()
                .find_flag("all")
                .unwrap()
                .is_set();
            println!("listing {} entries from {file}", if all { "all" } else { "open" });
        }
        Some("done") => {
            let id = options
                .find_subcommand("done")
                .unwrap()
                .typed_argument::<u64>("id")
                .unwrap()
                .get()
                .unwrap();
            println!("marked #{id} as done");
        }
        _ => {
            println!("{}", Printer::new(&options).usage());
        }
    }

    Ok(ExitCode::SUCCESS)
}
