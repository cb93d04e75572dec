use clap::Parser;
use filmpath::app::FilmPathApp;
use filmpath::colors::ColorScheme;
use filmpath::display::{display_search_info, display_search_results};
use filmpath::json_output::{create_json_output, print_json_output};
use filmpath::narration::{NarrationObserver, SpinnerObserver};
use filmpath::search::EXIT_ERROR;
use filmpath::{Args, create_search_request, execute_search};
use filmpath_core::{CancellationToken, SearchObserver, TracingObserver};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);
    let app = FilmPathApp::from_env();

    let catalog = match app.catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{} {}", colors.error("❌ Failed to build HTTP client:"), e);
            std::process::exit(EXIT_ERROR);
        }
    };

    let search_request = match create_search_request(args) {
        Ok(request) => request,
        Err(error_message) => {
            eprintln!("{} {}", colors.error("❌ Error:"), error_message);
            std::process::exit(EXIT_ERROR);
        }
    };

    let display_options = search_request.search_args.clone();
    if display_options.verbose && !display_options.json {
        display_search_info(&search_request, &colors);
    }

    let observer: Box<dyn SearchObserver> = if display_options.trace {
        Box::new(NarrationObserver::new(colors))
    } else if display_options.quiet || display_options.json {
        Box::new(TracingObserver)
    } else {
        Box::new(SpinnerObserver::new())
    };

    let cancel = CancellationToken::new();
    listen_for_interrupt(cancel.clone());

    let search_result = execute_search(search_request, &catalog, &cancel, observer.as_ref()).await;

    if display_options.json {
        let json_output = create_json_output(
            &search_result.result,
            &search_result.from_name,
            &search_result.to_name,
            &search_result.config,
            catalog.base_url(),
        );
        print_json_output(&json_output);
    } else {
        display_search_results(&search_result, catalog.base_url(), &colors);
    }

    std::process::exit(search_result.exit_code());
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Cancels the search on Ctrl-C; it stops at the next catalog request
fn listen_for_interrupt(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, cancelling search");
            cancel.cancel();
        }
    });
}
