use clap::Parser;
use miette::Result;
use registrar::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for readable diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        None => registrar::cli::commands::menu::run(&global),
        Some(Commands::Register(args)) => registrar::cli::commands::register::run(args, &global),
        Some(Commands::List(args)) => registrar::cli::commands::list::run(args, &global),
        Some(Commands::Completions(args)) => registrar::cli::commands::completions::run(args),
    }
}
