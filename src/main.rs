use std::{io::Read, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use squares_solver::{
    config::Config,
    dictionary::{filters, Dictionary},
    game::{
        request::solve_line,
        results::{render_grouped, separator, write_grouped},
        validator::explain,
        GridGenerator, SolveRequest,
    },
    routes, AppState,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "squares-solver",
    version,
    about = "Find every dictionary word traceable on a letter grid."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Word list, one word per line (overrides DICTIONARY_PATH)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Grid side length (overrides GRID_SIZE)
    #[arg(short = 'n', long, global = true)]
    grid_size: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP solver
    Serve,
    /// Solve one grid: cells then target length, read from --input or stdin
    Solve {
        /// Request line, e.g. "c o i b q u m h m i e y p l y c 8"
        #[arg(short, long)]
        input: Option<String>,

        /// Write grouped results to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print one traced path after each word
        #[arg(long, default_value_t = false)]
        paths: bool,
    },
    /// Print a random grid as a request line
    Generate,
    /// Clean up a word list in place
    Filter {
        #[arg(value_enum)]
        filter: FilterKind,

        /// Word list to rewrite
        #[arg(short, long, default_value = "words.txt")]
        file: PathBuf,

        /// Results file whose "--" suffixed lines are removed (for `flagged`)
        #[arg(long, default_value = "output.txt")]
        results: PathBuf,

        /// Prefix delimiter (for `strip-prefix`)
        #[arg(long, default_value = "|")]
        delimiter: String,

        /// Longest word kept (for `cap-length`)
        #[arg(long, default_value_t = filters::DEFAULT_MAX_WORD_LENGTH)]
        max_length: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterKind {
    StripPrefix,
    Flagged,
    NonAlphabetic,
    Unique,
    CapLength,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so solver output stays clean on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "squares_solver=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = &cli.dictionary {
        config.solver.dictionary_path = path.display().to_string();
    }
    if let Some(size) = cli.grid_size {
        config.solver.grid_size = size;
    }
    tracing::debug!("Configuration loaded");

    match cli.command {
        Command::Serve => serve(config).await,
        Command::Solve {
            input,
            output,
            paths,
        } => solve(config, input, output, paths).await,
        Command::Generate => {
            println!("{}", GridGenerator::generate(config.solver.grid_size).to_line());
            Ok(())
        }
        Command::Filter {
            filter,
            file,
            results,
            delimiter,
            max_length,
        } => {
            let report = match filter {
                FilterKind::StripPrefix => filters::strip_prefixes(&file, &delimiter).await?,
                FilterKind::Flagged => filters::remove_flagged(&file, &results).await?,
                FilterKind::NonAlphabetic => filters::remove_non_alphabetic(&file).await?,
                FilterKind::Unique => filters::make_unique(&file).await?,
                FilterKind::CapLength => filters::cap_length(&file, max_length).await?,
            };
            println!("kept {}, removed {}", report.kept, report.removed);
            Ok(())
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    tracing::info!("Starting squares solver server...");

    let dictionary = Dictionary::load(&config.solver.dictionary_path).await?;

    let state = Arc::new(AppState {
        config: config.clone(),
        dictionary,
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_routes()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Solve endpoint: http://{}/solve", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn solve(
    config: Config,
    input: Option<String>,
    output: Option<PathBuf>,
    paths: bool,
) -> Result<()> {
    let dictionary = Dictionary::load(&config.solver.dictionary_path).await?;

    let line = match input {
        Some(line) => line,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            buf.lines().next().unwrap_or_default().to_string()
        }
    };

    let results = solve_line(
        &line,
        config.solver.grid_size,
        &dictionary,
        config.solver.malformed_input,
    )?;
    tracing::info!("Found {} words", results.len());

    if let Some(path) = output {
        return write_grouped(path, &results).await;
    }

    if !paths {
        print!("{}", render_grouped(&results));
        return Ok(());
    }

    // No grid to trace on when the policy emptied a malformed request
    let request = SolveRequest::parse(&line, config.solver.grid_size).ok();
    for group in results.groups() {
        println!("{}", separator(group.length));
        for word in &group.words {
            let trace = request
                .as_ref()
                .and_then(|r| explain(&r.grid, word))
                .unwrap_or_default();
            println!("{} {}", word, trace);
        }
    }

    Ok(())
}
