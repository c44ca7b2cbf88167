use ai_programming_repl::Interpreter;
use ai_programming_repl::config::Args;
use anyhow::Result;
use tracing::Level;

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    init_logging(args.verbose);

    let interpreter = Interpreter::with_builtin_languages()?;
    if !args.command.is_empty() {
        let mut stdout = std::io::stdout();
        interpreter.run_lines(args.command.iter().map(String::as_str), &mut stdout)?;
        return Ok(());
    }

    interpreter.repl(&args.repl_config())
}
