use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::scoring::enhancement::dual_track::RoleTrack;
use crate::scoring::enhancement::role_level::RoleLevel;
use crate::scoring::enhancement::EnhancementOptions;

/// Score your job application fit against a skill matrix.
#[derive(Parser, Debug)]
#[command(name = "skillfit")]
#[command(version)]
#[command(
    about = "Score your job application fit against a skill matrix.",
    long_about = "Analyzes self-assessed skills against job requirements and prints a verdict \
                  with recommendations.\n\nStrategic positioning enhancements for executive \
                  roles are available with --enable-enhancements."
)]
#[command(after_help = "Examples:\n  \
    skillfit skills.csv\n  \
    skillfit skills.csv --enable-enhancements\n  \
    skillfit skills.csv --enable-enhancements --target-role-level c_suite \
    --proven-strengths cross-functional bioinformatics\n\n\
    The CSV needs Requirement, Classification (Essential, Important, Desirable, Implicit) \
    and SelfScore (0-5) columns. Use - to read from stdin.")]
pub struct Cli {
    /// Path to the skill matrix CSV
    pub csv_path: PathBuf,

    /// Enable all strategic positioning enhancements
    #[arg(long)]
    pub enable_enhancements: bool,

    /// Target role type for dual-track scoring (default: executive)
    #[arg(long, value_enum)]
    pub target_role_type: Option<RoleTrack>,

    /// Years of professional experience for calibration (default: 20)
    #[arg(long)]
    pub years_experience: Option<u32>,

    /// Target role level for calibration (default: senior_executive)
    #[arg(long, value_enum)]
    pub target_role_level: Option<RoleLevel>,

    /// Proven cross-functional strengths, e.g. cross-functional bioinformatics
    #[arg(long, num_args = 1..)]
    pub proven_strengths: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Flags override the environment defaults held in `config`.
    pub fn enhancement_options(&self, config: &Config) -> EnhancementOptions {
        EnhancementOptions {
            target_role_type: self.target_role_type.unwrap_or(config.target_role_type),
            years_experience: self.years_experience.unwrap_or(config.years_experience),
            target_role_level: self.target_role_level.unwrap_or(config.target_role_level),
            proven_strengths: self.proven_strengths.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("skillfit").chain(args.iter().copied()))
    }

    #[test]
    fn test_minimal_invocation() {
        let cli = parse(&["skills.csv"]).unwrap();
        assert_eq!(cli.csv_path, PathBuf::from("skills.csv"));
        assert!(!cli.enable_enhancements);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.proven_strengths.is_empty());

        let opts = cli.enhancement_options(&Config::default());
        assert_eq!(opts, EnhancementOptions::default());
    }

    #[test]
    fn test_full_enhancement_flags() {
        let cli = parse(&[
            "skills.csv",
            "--enable-enhancements",
            "--target-role-type",
            "ic",
            "--years-experience",
            "12",
            "--target-role-level",
            "c_suite",
            "--proven-strengths",
            "cross-functional",
            "bioinformatics",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(cli.enable_enhancements);
        assert_eq!(cli.format, OutputFormat::Json);

        let opts = cli.enhancement_options(&Config::default());
        assert_eq!(opts.target_role_type, RoleTrack::Ic);
        assert_eq!(opts.years_experience, 12);
        assert_eq!(opts.target_role_level, RoleLevel::CSuite);
        assert_eq!(opts.proven_strengths, vec!["cross-functional", "bioinformatics"]);
    }

    #[test]
    fn test_rejects_unknown_role_level() {
        let err = parse(&["skills.csv", "--target-role-level", "intern"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_role_choices_use_snake_case_labels() {
        let values: Vec<String> = RoleLevel::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(
            values,
            vec!["c_suite", "senior_executive", "director_vp", "senior_ic"]
        );

        let cli = parse(&[
            "skills.csv",
            "--target-role-level",
            "senior_ic",
            "--target-role-type",
            "hybrid",
        ])
        .unwrap();
        assert_eq!(cli.target_role_level, Some(RoleLevel::SeniorIc));
        assert_eq!(cli.target_role_type, Some(RoleTrack::Hybrid));
    }

    #[test]
    fn test_rejects_unknown_role_type() {
        let err = parse(&["skills.csv", "--target-role-type", "manager"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_csv_path_is_required() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_non_numeric_years_rejected() {
        assert!(parse(&["skills.csv", "--years-experience", "many"]).is_err());
    }

    #[test]
    fn test_flags_override_environment_defaults() {
        let config = Config {
            target_role_type: RoleTrack::Hybrid,
            target_role_level: RoleLevel::DirectorVp,
            years_experience: 8,
            ..Config::default()
        };

        let cli = parse(&["skills.csv"]).unwrap();
        let opts = cli.enhancement_options(&config);
        assert_eq!(opts.target_role_type, RoleTrack::Hybrid);
        assert_eq!(opts.target_role_level, RoleLevel::DirectorVp);
        assert_eq!(opts.years_experience, 8);

        let cli = parse(&["skills.csv", "--target-role-type", "executive"]).unwrap();
        assert_eq!(
            cli.enhancement_options(&config).target_role_type,
            RoleTrack::Executive
        );
    }

    #[test]
    fn test_clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
