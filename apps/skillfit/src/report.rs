//! Report rendering: the human-readable verdict and the JSON envelope.

use std::fmt::Write;

use serde::Serialize;

use crate::errors::AppError;
use crate::models::matrix::Classification;
use crate::scoring::base::{RowScore, ScoreResult};
use crate::scoring::config::ScoringConfig;
use crate::scoring::enhancement::EnhancementOptions;

const MAX_REQUIREMENT_WIDTH: usize = 48;

/// Everything the renderer needs beyond the result itself.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    #[serde(skip)]
    pub separator_width: usize,
    pub essential_gap_threshold: u8,
    pub important_gap_threshold: u8,
    /// Present for enhanced runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhancement: Option<EnhancementOptions>,
}

impl ReportContext {
    pub fn new(
        separator_width: usize,
        scoring: &ScoringConfig,
        enhancement: Option<EnhancementOptions>,
    ) -> Self {
        Self {
            separator_width,
            essential_gap_threshold: scoring.gap_threshold_of(Classification::Essential),
            important_gap_threshold: scoring.gap_threshold_of(Classification::Important),
            enhancement,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Verdict
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    CriticalGap,
    Excellent,
    Good,
    Possible,
    Significant,
}

impl Verdict {
    /// A core gap overrides every % fit tier. Tiers compare the 2-decimal fit.
    pub fn of(result: &ScoreResult) -> Self {
        if result.core_gap_present {
            return Verdict::CriticalGap;
        }
        match result.pct_fit_display() {
            p if p >= 0.80 => Verdict::Excellent,
            p if p >= 0.65 => Verdict::Good,
            p if p >= 0.50 => Verdict::Possible,
            _ => Verdict::Significant,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::CriticalGap => "Critical gap, address before applying.",
            Verdict::Excellent => "Excellent match",
            Verdict::Good => "Good match (minor gaps)",
            Verdict::Possible => "Possible match, several gaps",
            Verdict::Significant => "Significant gaps, consider learning first",
        }
    }

    fn next_steps(&self) -> &'static [&'static str] {
        match self {
            Verdict::CriticalGap => &[
                "1. Focus on closing the high and medium severity gaps first.",
                "2. Re-evaluate after addressing these critical skills.",
                "3. For each gap, consider:",
                "   - Can you find stronger evidence from your experience?",
                "   - What specific training or practice would improve your score?",
                "   - Are there alternative skills you could highlight to compensate?",
            ],
            Verdict::Excellent => &[
                "1. Apply immediately, you're an excellent match!",
                "2. Prepare to highlight your strengths in these areas.",
            ],
            Verdict::Good => &[
                "1. Apply with confidence, you're a good match.",
                "2. Prepare examples for your interview that address the minor gaps.",
            ],
            Verdict::Possible => &[
                "1. Consider whether to apply now or build skills first.",
                "2. If applying now, be prepared to discuss your development plan.",
            ],
            Verdict::Significant => &[
                "1. Focus on skill development before applying.",
                "2. Target the Weight 3 and Weight 2 items with low self-scores.",
            ],
        }
    }
}

fn fit_guidance(pct_fit: f64) -> &'static str {
    match pct_fit {
        p if p >= 0.80 => "Excellent overall fit → Apply immediately, emphasize strengths",
        p if p >= 0.65 => "Good fit; minor gaps → Apply; line up examples or quick up-skilling",
        p if p >= 0.50 => {
            "Possible fit; several gaps → Decide whether to apply now or build skills first"
        }
        _ => "Significant gaps → Up-skill before investing in an application",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Text report
// ────────────────────────────────────────────────────────────────────────────

fn title_case(label: &str) -> String {
    label
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(3)).collect();
        cut.push_str("...");
        cut
    }
}

fn render_rows(out: &mut String, rows: &[RowScore]) {
    let width = rows
        .iter()
        .map(|r| r.requirement.chars().count())
        .max()
        .unwrap_or_default()
        .clamp("Requirement".len(), MAX_REQUIREMENT_WIDTH);
    let enhanced = rows.iter().any(|r| r.enhancement.is_some());

    let _ = write!(
        out,
        "{:<width$}  {:<14} {:>5} {:>6} {:>6} {:>7}",
        "Requirement", "Classification", "Score", "Weight", "Emph", "Raw"
    );
    if enhanced {
        let _ = write!(
            out,
            " {:>5} {:>5} {:>5} {:>5}  {:<6} {}",
            "DT", "Exp", "XF", "Role", "Cplx", "Category"
        );
    }
    out.push('\n');

    for row in rows {
        let _ = write!(
            out,
            "{:<width$}  {:<14} {:>5} {:>6.1} {:>+6.1} {:>7.2}",
            truncate(&row.requirement, width),
            row.classification.as_str(),
            row.self_score,
            row.class_weight,
            row.emphasis_modifier,
            row.raw_score,
        );
        if let Some(e) = &row.enhancement {
            let category = e
                .skill_category
                .map_or_else(|| "-".to_string(), |c| c.to_string());
            let _ = write!(
                out,
                " {:>5.2} {:>5.2} {:>5.2} {:>5.2}  {:<6} {}",
                e.dual_track_modifier,
                e.experience_modifier,
                e.cross_functional_modifier,
                e.role_level_modifier,
                e.complexity.as_str(),
                category,
            );
        }
        out.push('\n');
    }
}

/// Renders the full text report.
pub fn render_text(result: &ScoreResult, ctx: &ReportContext) -> String {
    let w = ctx.separator_width;
    let separator = "-".repeat(w);
    let verdict = Verdict::of(result);
    let mut out = String::new();

    render_rows(&mut out, &result.rows);

    let _ = writeln!(out, "\n{separator}");
    if let Some(opts) = &ctx.enhancement {
        let _ = writeln!(out, "{:^w$}", "ENHANCED STRATEGIC POSITIONING RESULTS");
        let params = format!(
            "Role Type: {} | Experience: {}y | Level: {}",
            title_case(opts.target_role_type.as_str()),
            opts.years_experience,
            title_case(opts.target_role_level.as_str()),
        );
        let _ = writeln!(out, "{params:^w$}");
        if !opts.proven_strengths.is_empty() {
            let strengths = format!("Proven Strengths: {}", opts.proven_strengths.join(", "));
            let _ = writeln!(out, "{strengths:^w$}");
        }
        let _ = writeln!(out, "{separator}");
    }
    let _ = writeln!(out, "{:^w$}", "VERDICT");
    let _ = writeln!(out, "{separator}");

    // 1. Core gap
    let status = if result.core_gap_present { "YES" } else { "NO" };
    let _ = writeln!(out, "\n1. Core gap present : {status}");
    if result.core_gap_present {
        let count = |c: Classification| {
            result
                .core_gap_findings
                .iter()
                .filter(|g| g.classification == c)
                .count()
        };
        let essential = count(Classification::Essential);
        let important = count(Classification::Important);
        if essential > 0 {
            let _ = writeln!(
                out,
                "   {essential} Essential skill(s) scored ≤ {}.",
                ctx.essential_gap_threshold
            );
        }
        if important > 0 {
            let _ = writeln!(
                out,
                "   {important} Important skill(s) scored ≤ {}.",
                ctx.important_gap_threshold
            );
        }
        let _ = writeln!(out, "   Treat as a red flag; address these gaps before applying.");
    } else {
        let _ = writeln!(
            out,
            "   All essential and important skills meet the minimum score requirements."
        );
    }

    // 2. Points
    let _ = writeln!(
        out,
        "\n2. Actual points    : {} / {}",
        result.actual_points, result.max_points
    );
    let _ = writeln!(
        out,
        "   • Your weighted evidence of fit: {} points",
        result.actual_points
    );
    let _ = writeln!(out, "   • Maximum possible score: {} points", result.max_points);

    // 3. % Fit
    let _ = writeln!(out, "\n3. % Fit            : {:.1}%", result.pct_fit * 100.0);
    if result.core_gap_present {
        let _ = writeln!(out, "   DISCLAIMER: % Fit is misleading when core gaps are present.");
        let _ = writeln!(out, "   Address core gaps first before considering the % Fit value.");
    }
    let _ = writeln!(out, "   {}", fit_guidance(result.pct_fit_display()));

    // 4. Verdict
    let _ = writeln!(out, "\n4. Verdict          : {}", verdict.label());
    if result.core_gap_present {
        let _ = writeln!(out, "   Note: Core gap overrides the %-Fit tier.");

        // 5. Gap list
        let _ = writeln!(out, "\n5. Core Gap Skills:");
        for gap in &result.core_gap_findings {
            let _ = writeln!(
                out,
                "   • \"{}\" (Classification: {}, SelfScore: {}, Severity: {})",
                gap.name,
                gap.classification,
                gap.self_score,
                gap.severity.as_str()
            );
        }
        let _ = writeln!(
            out,
            "\n   Use as a to-do list: supply stronger evidence or up-skill"
        );
        let _ = writeln!(
            out,
            "   until you can honestly self-score above the threshold for these items."
        );
    }

    let _ = writeln!(out, "\n{separator}");
    let _ = writeln!(out, "{:^w$}", "RECOMMENDED NEXT STEPS");
    let _ = writeln!(out, "{separator}");
    for line in verdict.next_steps() {
        let _ = writeln!(out, "{line}");
    }
    let _ = writeln!(
        out,
        "\nReminder: Use concrete metrics (projects, KPIs) to justify your self-scores."
    );
    let _ = writeln!(
        out,
        "Run this tool again after improving skills or gathering better evidence."
    );

    out
}

// ────────────────────────────────────────────────────────────────────────────
// JSON report
// ────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ReportEnvelope<'a> {
    generated_at: String,
    scorer_backend: &'a str,
    verdict: &'static str,
    pct_fit_display: f64,
    parameters: &'a ReportContext,
    result: &'a ScoreResult,
}

/// Renders the result as a pretty-printed JSON document.
pub fn render_json(result: &ScoreResult, ctx: &ReportContext) -> Result<String, AppError> {
    let envelope = ReportEnvelope {
        generated_at: chrono::Utc::now().to_rfc3339(),
        scorer_backend: &result.scorer_backend,
        verdict: Verdict::of(result).label(),
        pct_fit_display: result.pct_fit_display(),
        parameters: ctx,
        result,
    };
    serde_json::to_string_pretty(&envelope).map_err(|e| AppError::Internal(e.into()))
}
