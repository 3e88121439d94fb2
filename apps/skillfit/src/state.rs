use crate::cli::Cli;
use crate::config::Config;
use crate::report::ReportContext;
use crate::scoring::config::ScoringConfig;
use crate::scoring::fit_scoring::{build_fit_scorer, FitScorer};

/// Everything one run needs, resolved once at startup.
pub struct AppState {
    pub scoring: ScoringConfig,
    /// Pluggable fit scorer. BaseFitScorer unless --enable-enhancements is set.
    pub fit_scorer: Box<dyn FitScorer>,
    pub report: ReportContext,
}

impl AppState {
    pub fn new(config: &Config, cli: &Cli) -> Self {
        let scoring = ScoringConfig::default();
        let options = cli.enhancement_options(config);
        let report = ReportContext::new(
            config.separator_width,
            &scoring,
            cli.enable_enhancements.then(|| options.clone()),
        );
        let fit_scorer = build_fit_scorer(cli.enable_enhancements, scoring.clone(), options);

        Self {
            scoring,
            fit_scorer,
            report,
        }
    }
}
