use crate::colors::ColorScheme;
use filmpath_core::{
    CatalogError, FilmRef, LookupSubject, PersonRef, SearchConfig, SearchError, SearchObserver,
    SearchReport,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Prints every traversal step to stderr
pub struct NarrationObserver {
    colors: ColorScheme,
}

impl NarrationObserver {
    pub fn new(colors: ColorScheme) -> Self {
        Self { colors }
    }
}

impl SearchObserver for NarrationObserver {
    fn search_started(&self, source: &str, target: &str, config: &SearchConfig) {
        eprintln!(
            "🔍 Searching {} → {} (max depth {} {})",
            self.colors.person_name(&format!("\"{}\"", source)),
            self.colors.person_name(&format!("\"{}\"", target)),
            self.colors.number(&config.max_depth.to_string()),
            config.depth_unit.as_str()
        );
    }

    fn node_dequeued(&self, person: &PersonRef, depth: usize) {
        eprintln!(
            "\n➡️  Current person: {} (depth {})",
            self.colors.person_name(&person.name),
            self.colors.number(&depth.to_string())
        );
    }

    fn depth_limit_reached(&self, _person: &PersonRef, _depth: usize) {
        eprintln!("  {}", self.colors.muted("Depth limit reached, moving on"));
    }

    fn filmography_fetched(&self, person: &PersonRef, films: usize) {
        eprintln!(
            "  ▶️  {} films for {}",
            self.colors.number(&films.to_string()),
            self.colors.person_name(&person.name)
        );
    }

    fn film_considered(&self, film: &FilmRef) {
        eprintln!(
            "    🎬 {} {}",
            self.colors.film_title(&film.title),
            self.colors.muted(&format!("({})", film.id))
        );
    }

    fn cast_fetched(&self, _film: &FilmRef, cast: usize) {
        eprintln!("      👥 {} cast members", self.colors.number(&cast.to_string()));
    }

    fn candidate_considered(&self, candidate: &PersonRef) {
        eprintln!(
            "        - {} {}",
            candidate.name,
            self.colors.muted(&format!("({})", candidate.id))
        );
    }

    fn person_enqueued(&self, person: &PersonRef, depth: usize) {
        eprintln!(
            "        ➕ queued {} (depth {})",
            self.colors.person_name(&person.name),
            depth
        );
    }

    fn lookup_skipped(&self, subject: &LookupSubject, error: &CatalogError) {
        eprintln!(
            "  {} {}: {}",
            self.colors.error("⚠️  Skipped"),
            subject,
            error
        );
    }

    fn search_finished(&self, result: &Result<SearchReport, SearchError>) {
        match result {
            Ok(report) if report.outcome.is_found() => {
                eprintln!("\n{}", self.colors.success("✅ Connection found!"))
            }
            Ok(_) => eprintln!("\n{}", self.colors.error("❌ No connection found")),
            Err(error) => eprintln!("\n{} {}", self.colors.error("❌"), error),
        }
    }
}

/// Spinner naming the person currently being expanded
pub struct SpinnerObserver {
    spinner: ProgressBar,
}

impl SpinnerObserver {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message("Resolving...");
        Self { spinner }
    }
}

impl Default for SpinnerObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchObserver for SpinnerObserver {
    fn node_dequeued(&self, person: &PersonRef, depth: usize) {
        self.spinner
            .set_message(format!("Expanding {} (depth {})", person.name, depth));
    }

    fn film_considered(&self, film: &FilmRef) {
        let message = self.spinner.message();
        let current = message.split(" · ").next().unwrap_or_default();
        self.spinner
            .set_message(format!("{} · {}", current, film.title));
    }

    fn lookup_skipped(&self, subject: &LookupSubject, error: &CatalogError) {
        self.spinner
            .println(format!("⚠️  Skipped {}: {}", subject, error));
    }

    fn search_finished(&self, _result: &Result<SearchReport, SearchError>) {
        self.spinner.finish_and_clear();
    }
}
