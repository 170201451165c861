use anyhow::Result;
use std::env;
use std::io::{self, Write};
use vpa::cli::{self, Mode};
use vpa::config::Config;
use vpa::context::StandardContext;
use vpa::notify::{LogSink, Tee};
use vpa::screen::ListScreen;
use vpa::script::{self, PrintSink};

#[tokio::main]
async fn main() -> Result<()> {
    let args = match cli::parse_args(env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'vpa --help' for usage.");
            std::process::exit(2);
        }
    };

    if args.mode == Mode::Help {
        cli::print_help("vpa");
        return Ok(());
    }

    let ctx = StandardContext::new(args.root);

    let cfg = match Config::load_or_init(&ctx) {
        Ok(c) => c,
        Err(e) => {
            // A missing file is replaced by the defaults.
            eprintln!("Error loading configuration:\n{:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = vpa::logging::init(&ctx, cfg.log_level_filter()) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    vpa::logging::install_panic_hook(&ctx);

    match args.mode {
        Mode::Batch => {
            let mut screen = ListScreen::new();
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let mut notices = io::stdout();
            let mut stderr = io::stderr();
            let mut sink = Tee(PrintSink::new(&mut notices), LogSink);
            let report = script::run(
                &mut screen,
                stdin.lock(),
                &mut stdout,
                &mut stderr,
                &mut sink,
            )?;
            stdout.flush()?;
            log::info!(
                "batch finished: {} commands, {} bad lines",
                report.executed,
                report.failed_lines.len()
            );
            if !report.is_ok() {
                std::process::exit(1);
            }
            Ok(())
        }
        _ => vpa::tui::run(cfg).await,
    }
}
